// File: crates/xyplot-core/src/error.rs
// Summary: Error taxonomy: fatal configuration errors abort a pass, row errors are skipped.

use std::fmt;

use thiserror::Error;

/// Which logical axis an error or group refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("x"),
            AxisKind::Y => f.write_str("y"),
        }
    }
}

/// Fatal configuration error. Any of these aborts the whole rendering pass
/// before a single primitive is emitted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    #[error("empty value range: min == max ({value})")]
    EmptyRange { value: f64 },

    #[error("range min must be below max ({min} > {max})")]
    UnorderedRange { min: f64, max: f64 },

    #[error("{axis}min >= {axis}max ({min} >= {max})")]
    InvertedRange { axis: AxisKind, min: f64, max: f64 },

    #[error("value range bounds must be finite ({min}, {max})")]
    NonFiniteRange { min: f64, max: f64 },

    #[error("less than 2 pairs of values ({found}), nothing to plot")]
    TooFewSamples { found: usize },

    #[error("series has no samples, extents are undefined")]
    EmptySeries,

    #[error("extents requested before recompute_extents()")]
    ExtentsNotComputed,

    #[error("y column {index} out of range, series has {columns} column(s)")]
    NoSuchColumn { index: usize, columns: usize },

    #[error("invalid numeric format '{spec}': {reason}")]
    InvalidFormat { spec: String, reason: &'static str },

    #[error("drawing region must have positive width and height ({width} x {height})")]
    DegenerateRegion { width: f64, height: f64 },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("unknown length unit '{0}'")]
    UnknownUnit(String),
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, PlotError>;

/// What was wrong with a single input row.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowErrorKind {
    #[error("not enough fields: column {column} missing")]
    MissingField { column: usize },

    #[error("float error in column {column}: '{value}'")]
    NotNumeric { column: usize, value: String },

    #[error("non-finite value in column {column}")]
    NonFinite { column: usize },

    #[error("expected {expected} y value(s), got {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("row is not valid UTF-8")]
    InvalidUtf8,
}

/// A recoverable, per-row input error. Reported and skipped, never escalated.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("line {line}: {kind}")]
pub struct RowError {
    /// 1-based line number in the source.
    pub line: u64,
    pub kind: RowErrorKind,
}

impl RowError {
    pub fn new(line: u64, kind: RowErrorKind) -> Self {
        Self { line, kind }
    }
}
