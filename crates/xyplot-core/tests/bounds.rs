// File: crates/xyplot-core/tests/bounds.rs
// Purpose: Validate decade rounding of extents and the shared min/max grid.

use xyplot_core::bounds::{ceil_to, floor_to, granularity, rounded_bounds};
use xyplot_core::PlotError;

#[test]
fn rounds_on_tens_grid() {
    assert_eq!(rounded_bounds([0.3, 4.2, 17.9]).unwrap(), (0.0, 20.0));
}

#[test]
fn min_uses_max_granularity() {
    // max 950 -> hundreds grid; min 3.7 floors to 0 on that grid, not to 3
    assert_eq!(rounded_bounds([3.7, 950.0]).unwrap(), (0.0, 1000.0));
    // negative min on a tens grid
    assert_eq!(rounded_bounds([-12.5, 42.0]).unwrap(), (-20.0, 50.0));
}

#[test]
fn zero_max_rounds_on_tens() {
    assert_eq!(granularity(0.0), 1);
    assert_eq!(rounded_bounds([-3.2, 0.0]).unwrap(), (-10.0, 0.0));
}

#[test]
fn small_magnitudes_stay_exact() {
    assert_eq!(granularity(0.25), -1);
    assert_eq!(ceil_to(0.25, -1), 0.3);
    assert_eq!(floor_to(0.25, -1), 0.2);
    assert_eq!(rounded_bounds([0.12, 0.25]).unwrap(), (0.1, 0.3));
}

#[test]
fn on_grid_values_do_not_move() {
    // 0.07 * 100 and 0.57 * 100 are not whole numbers in binary floating point
    assert_eq!(ceil_to(0.07, -2), 0.07);
    assert_eq!(floor_to(0.57, -2), 0.57);
    assert_eq!(ceil_to(0.57, -2), 0.57);
    assert_eq!(rounded_bounds([0.0, 0.07]).unwrap(), (0.0, 0.07));
    assert_eq!(rounded_bounds([0.0, 0.0007]).unwrap(), (0.0, 0.0007));
    // off-grid values still round outward
    assert_eq!(rounded_bounds([0.0, 0.29]).unwrap(), (0.0, 0.3));
    assert_eq!(rounded_bounds([0.0, 0.57]).unwrap(), (0.0, 0.6));
    assert_eq!(rounded_bounds([0.0, 1.1]).unwrap(), (0.0, 2.0));
}

#[test]
fn negative_max_uses_magnitude() {
    // |max| = 15 -> tens grid; ceil(-1.5) = -1
    assert_eq!(rounded_bounds([-73.0, -15.0]).unwrap(), (-80.0, -10.0));
}

#[test]
fn bounds_bracket_the_data() {
    let sets: [&[f64]; 4] = [&[1.0, 2.0, 3.0], &[-0.004, 0.07], &[1234.5, 99999.0], &[-5.0, 5.0]];
    for values in sets {
        let (lo, hi) = rounded_bounds(values.iter().copied()).unwrap();
        let raw_lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let raw_hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(lo <= raw_lo, "{lo} > {raw_lo}");
        assert!(hi >= raw_hi, "{hi} < {raw_hi}");
        assert!(lo < hi);
    }
}

#[test]
fn single_value_on_grid_collapses() {
    // identical values already on the grid give min == max; the axis rejects it later
    assert_eq!(rounded_bounds([20.0, 20.0]).unwrap(), (20.0, 20.0));
}

#[test]
fn empty_input_fails() {
    assert_eq!(rounded_bounds(std::iter::empty::<f64>()), Err(PlotError::EmptySeries));
}
