// File: crates/xyplot-core/src/options.rs
// Summary: Fixed plot configuration: every recognized option with its default.
// Notes:
// - Deserializable from TOML/JSON; unknown keys are rejected.

use serde::Deserialize;

use crate::error::Result;
use crate::format::NumberFormat;
use crate::theme::{self, Theme};
use crate::types::LengthUnit;
use crate::view::Bounds;

/// Per-axis options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisOptions {
    /// Tick label format spec, e.g. ".2f". Empty prints the shortest form.
    pub format: String,
    /// Fixed lower bound; auto from the data when unset.
    pub min: Option<f64>,
    /// Fixed upper bound; auto from the data when unset.
    pub max: Option<f64>,
    /// Number of main intervals; 0 disables ticks and labels.
    pub ticks: u32,
    /// Subticks per main interval.
    pub subticks: u32,
    /// Draw ticks into the plot area.
    pub ticks_in: bool,
    /// Draw ticks away from the plot area.
    pub ticks_out: bool,
    /// Draw main and sub gridlines across the region.
    pub grid: bool,
    /// Tick label rotation in degrees.
    pub label_angle: f64,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            format: String::new(),
            min: None,
            max: None,
            ticks: 10,
            subticks: 0,
            ticks_in: true,
            ticks_out: false,
            grid: false,
            label_angle: 0.0,
        }
    }
}

impl AxisOptions {
    pub fn bounds(&self) -> Bounds {
        Bounds { min: self.min, max: self.max }
    }

    pub fn number_format(&self) -> Result<NumberFormat> {
        NumberFormat::parse(&self.format)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderOptions {
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
    pub top: bool,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self { left: true, bottom: true, right: true, top: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOptions {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrokeOptions {
    pub width: f64,
    pub unit: LengthUnit,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self { width: 1.0, unit: LengthUnit::Px }
    }
}

impl StrokeOptions {
    pub fn width_px(&self) -> f64 {
        self.unit.to_px(self.width)
    }
}

/// The complete option set for one plot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
    pub border: BorderOptions,
    pub labels: LabelOptions,
    pub stroke: StrokeOptions,
    /// Theme preset name (`light`, `dark`).
    pub theme: String,
    /// Fill the region with the theme background.
    pub background: bool,
    /// Attach the plotted values to the root group.
    pub store_data: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x: AxisOptions::default(),
            y: AxisOptions::default(),
            border: BorderOptions::default(),
            labels: LabelOptions::default(),
            stroke: StrokeOptions::default(),
            theme: "light".to_string(),
            background: false,
            store_data: false,
        }
    }
}

impl PlotOptions {
    pub fn theme(&self) -> Result<Theme> {
        theme::find(&self.theme)
    }
}
