// File: crates/xyplot-core/src/clip.rs
// Summary: Polyline clipping against the visible value window with exact edge crossings.
// Notes:
// - Points exactly on the window boundary count as outside.
// - Crossings are computed walking from the inside point towards the outside point, so
//   the first edge hit along that walk is the visible end of the stroke.

use crate::geometry::Point;

/// The visible rectangle in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Strictly inside on both axes.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x_min < p.x && p.x < self.x_max && self.y_min < p.y && p.y < self.y_max
    }
}

/// One continuous visible stroke, in drawing space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSegment {
    pub points: Vec<Point>,
}

/// Parameter `s` at which `s0 + s * (s1 - s0)` reaches `target`.
/// `+inf` when the coordinate does not change, which excludes that edge.
#[inline]
pub fn intersection_parameter(s0: f64, s1: f64, target: f64) -> f64 {
    if s1 == s0 {
        return f64::INFINITY;
    }
    (target - s0) / (s1 - s0)
}

/// First window edge crossed on the way from `a` to `b`.
///
/// Candidates are checked in the order x-min, x-max, y-min, y-max and the smallest
/// parameter in `[0, 1)` wins; the first one found wins ties. Without a candidate the
/// result is `b`.
pub fn intersection_point(a: Point, b: Point, window: &Window) -> Point {
    let candidates = [
        intersection_parameter(a.x, b.x, window.x_min),
        intersection_parameter(a.x, b.x, window.x_max),
        intersection_parameter(a.y, b.y, window.y_min),
        intersection_parameter(a.y, b.y, window.y_max),
    ];
    let mut s = 1.0;
    for c in candidates {
        if (0.0..1.0).contains(&c) && c < s {
            s = c;
        }
    }
    a + (b - a) * s
}

/// Entry and exit crossings of a segment whose endpoints are both outside but whose
/// interior runs through the window. `None` when it misses or only grazes the window.
pub fn pass_through(a: Point, b: Point, window: &Window) -> Option<(Point, Point)> {
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p0, d, lo, hi) in [
        (a.x, b.x - a.x, window.x_min, window.x_max),
        (a.y, b.y - a.y, window.y_min, window.y_max),
    ] {
        if d == 0.0 {
            if !(lo < p0 && p0 < hi) {
                return None;
            }
            continue;
        }
        let (ta, tb) = ((lo - p0) / d, (hi - p0) / d);
        t0 = t0.max(ta.min(tb));
        t1 = t1.min(ta.max(tb));
    }
    (t0 < t1).then(|| (a.lerp(b, t0), a.lerp(b, t1)))
}

/// Clip an ordered polyline against `window`.
///
/// `map` converts retained and interpolated data points into drawing space. Returns one
/// [`PathSegment`] per continuous visible run.
pub fn clip_polyline<I, F>(samples: I, window: &Window, mut map: F) -> Vec<PathSegment>
where
    I: IntoIterator<Item = (f64, f64)>,
    F: FnMut(Point) -> Point,
{
    let mut out = Vec::new();
    let mut active: Option<PathSegment> = None;
    let mut prev: Option<Point> = None;

    for (x, y) in samples {
        let cur = Point::new(x, y);
        let inside = window.contains(cur);
        let Some(p) = prev.replace(cur) else {
            // first sample: nothing to interpolate from
            if inside {
                active = Some(PathSegment { points: vec![map(cur)] });
            }
            continue;
        };
        match (active.take(), inside) {
            (Some(mut seg), true) => {
                seg.points.push(map(cur));
                active = Some(seg);
            }
            (Some(mut seg), false) => {
                seg.points.push(map(intersection_point(p, cur, window)));
                out.push(seg);
            }
            (None, true) => {
                let entry = intersection_point(cur, p, window);
                active = Some(PathSegment { points: vec![map(entry), map(cur)] });
            }
            (None, false) => {
                if let Some((enter, exit)) = pass_through(p, cur, window) {
                    out.push(PathSegment { points: vec![map(enter), map(exit)] });
                }
            }
        }
    }
    out.extend(active);
    out
}
