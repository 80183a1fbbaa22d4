// File: crates/xyplot-core/src/view.rs
// Summary: Visible ranges: rounded data extents with per-bound user overrides applied.

use crate::clip::Window;
use crate::error::{AxisKind, PlotError, Result};
use crate::series::Series;

/// User overrides for one axis; `None` keeps the auto-computed bound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub const AUTO: Bounds = Bounds { min: None, max: None };

    pub fn fixed(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    fn is_complete(&self) -> bool { self.min.is_some() && self.max.is_some() }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Resolve the visible window for `series`.
    ///
    /// Extents are only consulted for bounds the caller left open. Fails when the
    /// result is empty or inverted on either axis.
    pub fn resolve(series: &Series, x: Bounds, y: Bounds) -> Result<Self> {
        let x_auto = if x.is_complete() { (f64::NAN, f64::NAN) } else { series.x_extent()? };
        let y_auto = if y.is_complete() { (f64::NAN, f64::NAN) } else { series.y_extent()? };
        let view = Self {
            x_min: x.min.unwrap_or(x_auto.0),
            x_max: x.max.unwrap_or(x_auto.1),
            y_min: y.min.unwrap_or(y_auto.0),
            y_max: y.max.unwrap_or(y_auto.1),
        };
        view.validate()?;
        Ok(view)
    }

    pub fn validate(&self) -> Result<()> {
        check(AxisKind::X, self.x_min, self.x_max)?;
        check(AxisKind::Y, self.y_min, self.y_max)
    }

    pub fn window(&self) -> Window {
        Window::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

fn check(axis: AxisKind, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PlotError::NonFiniteRange { min, max });
    }
    if min >= max {
        return Err(PlotError::InvertedRange { axis, min, max });
    }
    Ok(())
}
