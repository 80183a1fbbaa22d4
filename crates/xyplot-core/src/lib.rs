// File: crates/xyplot-core/src/lib.rs
// Summary: Core library entry point; exports the XY plot API (bounds, axes, clipping, scene).

pub mod axis;
pub mod bounds;
pub mod chart;
pub mod clip;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod options;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, ValueRange};
pub use bounds::rounded_bounds;
pub use chart::{assemble, Chart};
pub use clip::{clip_polyline, intersection_point, PathSegment, Window};
pub use error::{AxisKind, PlotError, Result, RowError, RowErrorKind};
pub use format::NumberFormat;
pub use geometry::{Point, Region};
pub use options::{AxisOptions, BorderOptions, LabelOptions, PlotOptions, StrokeOptions};
pub use scale::{PlotTransform, ScaleTransform};
pub use scene::{Group, Node, Primitive, PrimitiveKind, Role, Scene};
pub use series::{ColumnLayout, Sample, Series};
pub use svg::{to_svg_string, write_svg};
pub use theme::{Color, StrokeStyle, StyleSheet, TextAnchor, TextStyle, Theme};
pub use types::LengthUnit;
pub use view::{Bounds, ViewState};
