// File: crates/xyplot-core/tests/clip.rs
// Purpose: Polyline clipping against the value window, in data space (identity mapping).

use xyplot_core::clip::pass_through;
use xyplot_core::{clip_polyline, intersection_point, PathSegment, Point, Window};

fn clip(samples: &[(f64, f64)], window: &Window) -> Vec<PathSegment> {
    clip_polyline(samples.iter().copied(), window, |p| p)
}

fn pts(seg: &PathSegment) -> Vec<(f64, f64)> {
    seg.points.iter().map(|p| (p.x, p.y)).collect()
}

fn assert_near(got: (f64, f64), want: (f64, f64)) {
    assert!((got.0 - want.0).abs() < 1e-9 && (got.1 - want.1).abs() < 1e-9, "{got:?} != {want:?}");
}

const UNIT: Window = Window::new(0.0, 10.0, 0.0, 10.0);

#[test]
fn fully_inside_is_one_segment() {
    let samples = [(1.0, 1.0), (2.0, 5.0), (3.0, 2.0), (9.0, 9.0)];
    let segs = clip(&samples, &UNIT);
    assert_eq!(segs.len(), 1);
    assert_eq!(pts(&segs[0]), samples.to_vec());
}

#[test]
fn fully_outside_is_empty() {
    let segs = clip(&[(-5.0, 20.0), (-1.0, 15.0), (-3.0, 11.0)], &UNIT);
    assert!(segs.is_empty());
}

#[test]
fn boundary_points_are_outside() {
    assert!(!UNIT.contains(Point::new(0.0, 5.0)));
    assert!(!UNIT.contains(Point::new(5.0, 10.0)));
    assert!(UNIT.contains(Point::new(5.0, 5.0)));
    // running along an edge never enters the window
    assert!(clip(&[(0.0, 1.0), (0.0, 9.0)], &UNIT).is_empty());
}

#[test]
fn peak_above_window_splits_in_two() {
    let window = Window::new(0.0, 10.0, 0.0, 3.0);
    let segs = clip(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)], &window);
    assert_eq!(segs.len(), 2);
    let a = pts(&segs[0]);
    let b = pts(&segs[1]);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
    assert_near(a[0], (0.0, 0.0));
    assert_near(a[1], (3.0, 3.0));
    assert_near(b[0], (7.0, 3.0));
    assert_near(b[1], (10.0, 0.0));
}

#[test]
fn first_sample_inside_starts_segment() {
    let segs = clip(&[(5.0, 5.0), (15.0, 5.0)], &UNIT);
    assert_eq!(segs.len(), 1);
    assert_eq!(pts(&segs[0]), vec![(5.0, 5.0), (10.0, 5.0)]);
}

#[test]
fn exit_onto_edge_keeps_that_point() {
    // last sample sits exactly on x-max: outside, crossing parameter is 1
    let segs = clip(&[(5.0, 1.0), (5.0, 5.0), (10.0, 5.0)], &UNIT);
    assert_eq!(segs.len(), 1);
    assert_eq!(pts(&segs[0]), vec![(5.0, 1.0), (5.0, 5.0), (10.0, 5.0)]);
}

#[test]
fn reentry_emits_entry_crossing() {
    let samples = [(1.0, 5.0), (3.0, 15.0), (5.0, 5.0), (7.0, 6.0)];
    let segs = clip(&samples, &UNIT);
    assert_eq!(segs.len(), 2);
    let a = pts(&segs[0]);
    let b = pts(&segs[1]);
    assert_near(a[0], (1.0, 5.0));
    assert_near(a[1], (2.0, 10.0));
    assert_near(b[0], (4.0, 10.0));
    assert_near(b[1], (5.0, 5.0));
    assert_near(b[2], (7.0, 6.0));
}

#[test]
fn entry_through_corner_region_uses_inner_edge() {
    // from (-5, 15) to (5, 5): crosses y=10 at x=0 and x=0 at y=10, i.e. the corner
    let segs = clip(&[(-5.0, 15.0), (5.0, 5.0)], &UNIT);
    assert_eq!(segs.len(), 1);
    assert_near(pts(&segs[0])[0], (0.0, 10.0));

    // walking back from (4, 2), y=10 is hit before x=0
    let segs = clip(&[(-2.0, 20.0), (4.0, 2.0)], &UNIT);
    assert_near(pts(&segs[0])[0], (4.0 - 6.0 * (8.0 / 18.0), 10.0));
}

#[test]
fn intersection_prefers_first_edge_on_ties() {
    // exits through the top-right corner; x-max and y-max tie at s = 0.5
    let p = intersection_point(Point::new(5.0, 5.0), Point::new(15.0, 15.0), &UNIT);
    assert_eq!(p, Point::new(10.0, 10.0));
}

#[test]
fn intersection_without_crossing_returns_target() {
    let b = Point::new(6.0, 7.0);
    assert_eq!(intersection_point(Point::new(2.0, 2.0), b, &UNIT), b);
}

#[test]
fn pass_through_ignores_grazing_segments() {
    // touches the top-left corner only
    assert!(pass_through(Point::new(-5.0, 5.0), Point::new(5.0, 15.0), &UNIT).is_none());
    // crosses cleanly
    let (enter, exit) = pass_through(Point::new(-5.0, 5.0), Point::new(15.0, 5.0), &UNIT).unwrap();
    assert_eq!(enter, Point::new(0.0, 5.0));
    assert_eq!(exit, Point::new(10.0, 5.0));
}

#[test]
fn mapping_applies_to_every_emitted_point() {
    let segs = clip_polyline([(5.0, 5.0), (15.0, 5.0)], &UNIT, |p| Point::new(p.x * 2.0, -p.y));
    assert_eq!(pts(&segs[0]), vec![(10.0, -5.0), (20.0, -5.0)]);
}
