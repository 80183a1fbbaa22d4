// File: crates/xyplot-core/src/axis.rs
// Summary: Oriented axis segment over a value range; ticks, subticks and tick labels.
// Notes:
// - Offsets are measured along the axis normal (-sin, cos): for a left-to-right axis a
//   positive offset points down, for a bottom-to-top axis it points right.

use crate::error::{PlotError, Result};
use crate::format::NumberFormat;
use crate::geometry::Point;
use crate::grid::{subtick_values, tick_values};
use crate::scene::Primitive;
use crate::theme::{StrokeStyle, TextStyle};

/// A (min, max) pair with `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::NonFiniteRange { min, max });
        }
        if min == max {
            return Err(PlotError::EmptyRange { value: min });
        }
        if min > max {
            return Err(PlotError::UnorderedRange { min, max });
        }
        Ok(Self { min, max })
    }
    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    pub fn span(&self) -> f64 { self.max - self.min }
}

/// An axis drawn from `start` (at `range.min`) to `end` (at `range.max`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    start: Point,
    end: Point,
    range: ValueRange,
    cos: f64,
    sin: f64,
}

impl Axis {
    pub fn new(start: Point, end: Point, range: ValueRange) -> Self {
        let angle = (end.y - start.y).atan2(end.x - start.x);
        Self { start, end, range, cos: angle.cos(), sin: angle.sin() }
    }

    /// Validating constructor, fails when `min == max`.
    pub fn try_new(start: Point, end: Point, min: f64, max: f64) -> Result<Self> {
        Ok(Self::new(start, end, ValueRange::new(min, max)?))
    }

    pub fn start(&self) -> Point { self.start }
    pub fn end(&self) -> Point { self.end }
    pub fn range(&self) -> ValueRange { self.range }

    /// Axis value to drawing-space point. Values outside the range extrapolate.
    pub fn transform(&self, value: f64) -> Point {
        let t = (value - self.range.min) / self.range.span();
        self.start.lerp(self.end, t)
    }

    /// `p` moved by `perp` along the axis normal and `along` in axis direction.
    #[inline]
    fn offset(&self, p: Point, perp: f64, along: f64) -> Point {
        Point::new(
            p.x - perp * self.sin + along * self.cos,
            p.y + perp * self.cos + along * self.sin,
        )
    }

    fn mark(&self, value: f64, perp_from: f64, perp_to: f64, stroke: &StrokeStyle) -> Primitive {
        let p = self.transform(value);
        Primitive::line(self.offset(p, perp_from, 0.0), self.offset(p, perp_to, 0.0), *stroke)
    }

    /// `n + 1` main tick lines from `perp_from` to `perp_to` across the axis.
    pub fn main_ticks(&self, n: usize, perp_from: f64, perp_to: f64, stroke: &StrokeStyle) -> Vec<Primitive> {
        tick_values(self.range.min, self.range.max, n)
            .into_iter()
            .map(|v| self.mark(v, perp_from, perp_to, stroke))
            .collect()
    }

    /// `n * m` subtick lines, `m` inside each main interval.
    pub fn sub_ticks(&self, n: usize, m: usize, perp_from: f64, perp_to: f64, stroke: &StrokeStyle) -> Vec<Primitive> {
        subtick_values(self.range.min, self.range.max, n, m)
            .into_iter()
            .map(|v| self.mark(v, perp_from, perp_to, stroke))
            .collect()
    }

    /// `n + 1` tick labels, shifted `perp` across and `along` the axis.
    pub fn tick_labels(
        &self,
        n: usize,
        format: &NumberFormat,
        perp: f64,
        along: f64,
        style: &TextStyle,
    ) -> Vec<Primitive> {
        self.rotated_tick_labels(n, format, perp, along, style, 0.0)
    }

    /// Like [`Axis::tick_labels`], each label rotated by `degrees` about its anchor.
    pub fn rotated_tick_labels(
        &self,
        n: usize,
        format: &NumberFormat,
        perp: f64,
        along: f64,
        style: &TextStyle,
        degrees: f64,
    ) -> Vec<Primitive> {
        tick_values(self.range.min, self.range.max, n)
            .into_iter()
            .map(|v| {
                let at = self.offset(self.transform(v), perp, along);
                Primitive::rotated_text(at, format.format(v), *style, degrees)
            })
            .collect()
    }
}
