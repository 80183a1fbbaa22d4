// File: crates/xyplot-core/src/bounds.rs
// Summary: "Nice" decade rounding of data extents.
// Notes:
// - The max picks the granularity from its own magnitude; the min is floored on the
//   same grid so that tick steps divide the range evenly.

use crate::error::{PlotError, Result};

/// Decimal exponent used as rounding granularity for `value`.
/// Zero has no magnitude; it rounds on the tens place.
pub fn granularity(value: f64) -> i32 {
    if value == 0.0 { 1 } else { value.abs().log10().floor() as i32 }
}

/// Round `value` up to a multiple of `10^exponent`.
pub fn ceil_to(value: f64, exponent: i32) -> f64 {
    round_on_grid(value, exponent, f64::ceil)
}

/// Round `value` down to a multiple of `10^exponent`.
pub fn floor_to(value: f64, exponent: i32) -> f64 {
    round_on_grid(value, exponent, f64::floor)
}

/// Apply `op` to `value` in grid units. A quotient within rounding noise of a whole
/// number is taken as that number, so `0.07` stays `0.07` on the hundredths grid even
/// though `0.07 * 100` is `7.000000000000001`.
fn round_on_grid(value: f64, exponent: i32, op: fn(f64) -> f64) -> f64 {
    let snap = |q: f64| {
        let r = q.round();
        if (q - r).abs() <= 1e-9 * r.abs().max(1.0) { r } else { op(q) }
    };
    if exponent >= 0 {
        let m = 10f64.powi(exponent);
        snap(value / m) * m
    } else {
        // multiply by the exact inverse to keep 0.3 as 0.3 rather than 3 * 0.1
        let inv = 10f64.powi(-exponent);
        snap(value * inv) / inv
    }
}

/// Raw (min, max) of a sequence, `None` when empty.
pub fn raw_extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Rounded (min, max) of a numeric sequence.
///
/// `max` is rounded up at granularity `10^floor(log10(|max|))`, `min` is rounded down at
/// that same granularity. A sequence with a single distinct value can come back with
/// `min == max`; rejecting that is left to [`crate::ValueRange::new`].
///
/// ```
/// use xyplot_core::bounds::rounded_bounds;
/// assert_eq!(rounded_bounds([0.3, 4.2, 17.9]).unwrap(), (0.0, 20.0));
/// ```
pub fn rounded_bounds<I>(values: I) -> Result<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let (lo, hi) = raw_extent(values).ok_or(PlotError::EmptySeries)?;
    let exp = granularity(hi);
    Ok((floor_to(lo, exp), ceil_to(hi, exp)))
}
