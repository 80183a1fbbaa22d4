// File: crates/xyplot-core/src/grid.rs
// Summary: Tick and subtick value layout along a value range.

/// `n + 1` evenly spaced main tick values from `min` to `max` (`min + i * step`).
/// Empty for `n == 0`.
pub fn tick_values(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n == 0 { return Vec::new(); }
    let step = (max - min) / n as f64;
    (0..=n).map(|i| min + i as f64 * step).collect()
}

/// `m` subtick values strictly inside each of the `n` main intervals,
/// at `tick + j * step / (m + 1)` for `j` in `1..=m`.
pub fn subtick_values(min: f64, max: f64, n: usize, m: usize) -> Vec<f64> {
    if n == 0 || m == 0 { return Vec::new(); }
    let step = (max - min) / n as f64;
    let sub = step / (m as f64 + 1.0);
    (0..n)
        .flat_map(|i| {
            let base = min + i as f64 * step;
            (1..=m).map(move |j| base + j as f64 * sub)
        })
        .collect()
}
