// File: crates/demo/src/config.rs
// Summary: TOML configuration file and the CLI overrides applied on top of it.
// Notes:
// - Every table is optional; missing keys take their defaults, unknown keys are errors.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use xyplot_core::{ColumnLayout, PlotOptions, Region};

use crate::cli::Args;

/// Where the values come from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputOptions {
    pub delimiter: String,
    pub x_column: usize,
    /// Column indices separated by any of `,;: `.
    pub y_columns: String,
    /// Leading physical lines to ignore.
    pub skip_rows: u64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self { delimiter: ";".to_string(), x_column: 0, y_columns: "1".to_string(), skip_rows: 0 }
    }
}

impl InputOptions {
    /// Delimiter byte; `\t` is accepted as an escape for tab.
    pub fn delimiter_byte(&self) -> Result<u8> {
        let d = self.delimiter.replace("\\t", "\t");
        match d.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => anyhow::bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter),
        }
    }

    pub fn layout(&self) -> Result<ColumnLayout> {
        let ys = self
            .y_columns
            .split([',', ';', ':', ' '])
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<usize>().with_context(|| format!("invalid y column index '{s}'")))
            .collect::<Result<Vec<_>>>()?;
        if ys.is_empty() {
            anyhow::bail!("no y columns given in '{}'", self.y_columns);
        }
        Ok(ColumnLayout::new(self.x_column, ys))
    }
}

/// The drawing region the plot is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegionOptions {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self { left: 0.0, top: 0.0, width: 400.0, height: 300.0 }
    }
}

impl RegionOptions {
    pub fn region(&self) -> Region {
        Region::from_ltwh(self.left, self.top, self.width, self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: InputOptions,
    pub region: RegionOptions,
    pub plot: PlotOptions,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Overlay the flags given on the command line.
    pub fn apply_args(&mut self, args: &Args) {
        let input = &mut self.input;
        set(&mut input.delimiter, &args.delimiter);
        set(&mut input.x_column, &args.x_column);
        set(&mut input.y_columns, &args.y_columns);
        set(&mut input.skip_rows, &args.skip_rows);

        let region = &mut self.region;
        set(&mut region.left, &args.left);
        set(&mut region.top, &args.top);
        set(&mut region.width, &args.width);
        set(&mut region.height, &args.height);

        let plot = &mut self.plot;
        set(&mut plot.labels.title, &args.title);
        set(&mut plot.labels.x_axis, &args.x_label);
        set(&mut plot.labels.y_axis, &args.y_label);
        plot.x.min = args.x_min.or(plot.x.min);
        plot.x.max = args.x_max.or(plot.x.max);
        plot.y.min = args.y_min.or(plot.y.min);
        plot.y.max = args.y_max.or(plot.y.max);
        set(&mut plot.x.ticks, &args.x_ticks);
        set(&mut plot.y.ticks, &args.y_ticks);
        set(&mut plot.x.subticks, &args.x_subticks);
        set(&mut plot.y.subticks, &args.y_subticks);
        set(&mut plot.x.format, &args.x_format);
        set(&mut plot.y.format, &args.y_format);
        plot.x.grid |= args.x_grid;
        plot.y.grid |= args.y_grid;
        plot.x.ticks_out |= args.ticks_out;
        plot.y.ticks_out |= args.ticks_out;
        set(&mut plot.theme, &args.theme);
        plot.background |= args.background;
        set(&mut plot.stroke.width, &args.stroke_width);
        set(&mut plot.stroke.unit, &args.stroke_unit);
        plot.store_data |= args.store_data;
    }
}

fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}
