// File: crates/xyplot-core/src/types.rs
// Summary: Shared types and constants (tick/font sizes, stroke length units).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PlotError;

/// Main tick length in drawing units (8px).
pub const TICK_SIZE: f64 = 8.0;
/// Label font size in drawing units (10pt).
pub const FONT_SIZE: f64 = 10.0 * PX_PER_PT;

/// CSS reference pixels per point (96 dpi / 72).
pub const PX_PER_PT: f64 = 96.0 / 72.0;
/// CSS reference pixels per inch.
pub const PX_PER_IN: f64 = 96.0;

/// Length unit used for the stroke width option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Px,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
}

impl LengthUnit {
    /// Convert `value` in this unit to drawing units (px).
    pub fn to_px(self, value: f64) -> f64 {
        match self {
            LengthUnit::Px => value,
            LengthUnit::Pt => value * PX_PER_PT,
            LengthUnit::Pc => value * PX_PER_PT * 12.0,
            LengthUnit::Mm => value * PX_PER_IN / 25.4,
            LengthUnit::Cm => value * PX_PER_IN / 2.54,
            LengthUnit::In => value * PX_PER_IN,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "px" => Ok(LengthUnit::Px),
            "pt" => Ok(LengthUnit::Pt),
            "pc" => Ok(LengthUnit::Pc),
            "mm" => Ok(LengthUnit::Mm),
            "cm" => Ok(LengthUnit::Cm),
            "in" => Ok(LengthUnit::In),
            other => Err(PlotError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LengthUnit::Px => "px",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::In => "in",
        };
        f.write_str(s)
    }
}
