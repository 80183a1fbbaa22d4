// File: crates/demo/src/input.rs
// Summary: CSV loading into a Series; malformed rows are logged and skipped, never fatal.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use xyplot_core::{RowError, RowErrorKind, Series};

use crate::config::InputOptions;

/// Outcome of reading one CSV source.
#[derive(Debug)]
pub struct Loaded {
    pub series: Series,
    /// Rows that could not be used, in input order.
    pub skipped: Vec<RowError>,
}

/// Read every record from `reader` according to `input`.
///
/// Rows are numbered by their starting line (1-based); rows at or before
/// `input.skip_rows` are ignored. I/O failures abort, row problems do not.
pub fn read_series<R: Read>(reader: R, input: &InputOptions) -> Result<Loaded> {
    let layout = input.layout()?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(input.delimiter_byte()?)
        .from_reader(reader);

    let mut series = Series::new(layout.ys.len());
    let mut skipped = Vec::new();
    let mut record = csv::StringRecord::new();

    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                if line <= input.skip_rows {
                    continue;
                }
                let fields: Vec<&str> = record.iter().collect();
                if let Err(e) = series.push_record(line, fields.as_slice(), &layout) {
                    warn!("{e}");
                    skipped.push(e);
                }
            }
            Err(e) => {
                let csv::ErrorKind::Utf8 { pos, .. } = e.kind() else {
                    return Err(e).context("reading CSV input");
                };
                let line = pos.as_ref().map_or(0, |p| p.line());
                if line <= input.skip_rows {
                    continue;
                }
                let err = RowError::new(line, RowErrorKind::InvalidUtf8);
                warn!("{err}");
                skipped.push(err);
            }
        }
    }

    debug!(rows = series.len(), skipped = skipped.len(), columns = series.columns(), "read CSV");
    Ok(Loaded { series, skipped })
}
