// File: crates/xyplot-core/src/series.rs
// Summary: XY series model: samples sharing one x with parallel y columns, plus cached extents.
// Notes:
// - Extents are only valid after `recompute_extents()`; reading them earlier is an error
//   rather than a silently stale value.

use crate::bounds::rounded_bounds;
use crate::error::{PlotError, Result, RowError, RowErrorKind};

/// One observation: an x and one y per configured column.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub ys: Vec<f64>,
}

/// Which record fields feed the series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub x: usize,
    pub ys: Vec<usize>,
}

impl ColumnLayout {
    pub fn new(x: usize, ys: impl Into<Vec<usize>>) -> Self {
        Self { x, ys: ys.into() }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(0, vec![1])
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Extents {
    x: (f64, f64),
    ys: Vec<(f64, f64)>,
}

/// Ordered samples with `columns` parallel y series.
#[derive(Clone, Debug)]
pub struct Series {
    columns: usize,
    samples: Vec<Sample>,
    extents: Option<Extents>,
}

impl Series {
    /// Empty series with `columns` y columns.
    pub fn new(columns: usize) -> Self {
        Self { columns: columns.max(1), samples: Vec::new(), extents: None }
    }

    /// Single-column series from (x, y) pairs.
    pub fn from_xy(data: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut s = Self::new(1);
        s.samples.extend(data.into_iter().map(|(x, y)| Sample { x, ys: vec![y] }));
        s
    }

    pub fn columns(&self) -> usize { self.columns }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn samples(&self) -> &[Sample] { &self.samples }

    /// Append one sample. Invalidates cached extents.
    pub fn push(&mut self, x: f64, ys: Vec<f64>) -> std::result::Result<(), RowErrorKind> {
        if ys.len() != self.columns {
            return Err(RowErrorKind::ColumnCount { expected: self.columns, found: ys.len() });
        }
        self.samples.push(Sample { x, ys });
        self.extents = None;
        Ok(())
    }

    /// Parse one input record according to `layout` and append it.
    /// `line` is only used for error reporting.
    pub fn push_record<S: AsRef<str>>(
        &mut self,
        line: u64,
        fields: &[S],
        layout: &ColumnLayout,
    ) -> std::result::Result<(), RowError> {
        let parse = |column: usize| -> std::result::Result<f64, RowError> {
            let raw: &str = fields
                .get(column)
                .map(|f| f.as_ref())
                .ok_or_else(|| RowError::new(line, RowErrorKind::MissingField { column }))?;
            let v = raw.trim().parse::<f64>().map_err(|_| {
                RowError::new(line, RowErrorKind::NotNumeric { column, value: raw.to_string() })
            })?;
            if v.is_finite() { Ok(v) } else { Err(RowError::new(line, RowErrorKind::NonFinite { column })) }
        };
        let x = parse(layout.x)?;
        let ys = layout.ys.iter().map(|&c| parse(c)).collect::<std::result::Result<Vec<_>, _>>()?;
        self.push(x, ys).map_err(|kind| RowError::new(line, kind))
    }

    /// Sort by x ascending so the polyline runs left to right. Stable for equal x.
    pub fn sort_by_x(&mut self) {
        self.samples.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// (x, y) pairs of one y column, in sample order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(move |s| (s.x, s.ys[index]))
    }

    /// Recompute the rounded x extent and one rounded extent per y column.
    pub fn recompute_extents(&mut self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(PlotError::EmptySeries);
        }
        let x = rounded_bounds(self.samples.iter().map(|s| s.x))?;
        let ys = (0..self.columns)
            .map(|i| rounded_bounds(self.samples.iter().map(|s| s.ys[i])))
            .collect::<Result<Vec<_>>>()?;
        self.extents = Some(Extents { x, ys });
        Ok(())
    }

    pub fn x_extent(&self) -> Result<(f64, f64)> {
        self.extents.as_ref().map(|e| e.x).ok_or(PlotError::ExtentsNotComputed)
    }

    /// Extent of a single y column.
    pub fn y_column_extent(&self, index: usize) -> Result<(f64, f64)> {
        let e = self.extents.as_ref().ok_or(PlotError::ExtentsNotComputed)?;
        e.ys.get(index).copied().ok_or(PlotError::NoSuchColumn { index, columns: self.columns })
    }

    /// Overall y extent: min of the column mins, max of the column maxes.
    pub fn y_extent(&self) -> Result<(f64, f64)> {
        let e = self.extents.as_ref().ok_or(PlotError::ExtentsNotComputed)?;
        let lo = e.ys.iter().map(|r| r.0).fold(f64::INFINITY, f64::min);
        let hi = e.ys.iter().map(|r| r.1).fold(f64::NEG_INFINITY, f64::max);
        Ok((lo, hi))
    }
}
