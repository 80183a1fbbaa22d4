// File: crates/demo/src/cli.rs
// Summary: Command line arguments. Every flag is optional and overrides the config file.

use std::path::PathBuf;

use clap::Parser;
use xyplot_core::LengthUnit;

/// Plot XY data from a CSV file as SVG, optionally rasterized to PNG.
#[derive(Parser, Debug)]
#[command(name = "xyplot", author, version, about, long_about = None)]
pub struct Args {
    /// Input CSV file
    pub input: PathBuf,

    /// TOML configuration file with [input], [region] and [plot] tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SVG output path
    #[arg(short, long, default_value = "xyplot.svg")]
    pub output: PathBuf,

    /// Also rasterize to this PNG path
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Device pixels per drawing unit for --png
    #[arg(long, default_value_t = 1.0)]
    pub png_scale: f32,

    /// Log level filter (falls back to RUST_LOG, then "info")
    #[arg(short, long)]
    pub log_level: Option<String>,

    // ---- input ----
    /// Field delimiter, a single character; "\t" selects tab
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Index of the x column
    #[arg(long)]
    pub x_column: Option<usize>,

    /// Indices of the y columns, separated by any of ",;: "
    #[arg(long)]
    pub y_columns: Option<String>,

    /// Number of leading lines to ignore
    #[arg(long)]
    pub skip_rows: Option<u64>,

    // ---- region ----
    #[arg(long, allow_negative_numbers = true)]
    pub left: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub top: Option<f64>,
    #[arg(long)]
    pub width: Option<f64>,
    #[arg(long)]
    pub height: Option<f64>,

    // ---- plot ----
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub x_label: Option<String>,
    #[arg(long)]
    pub y_label: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Main tick intervals on x (0 disables ticks and labels)
    #[arg(long)]
    pub x_ticks: Option<u32>,
    #[arg(long)]
    pub y_ticks: Option<u32>,
    #[arg(long)]
    pub x_subticks: Option<u32>,
    #[arg(long)]
    pub y_subticks: Option<u32>,

    /// Tick label format, e.g. ".2f", "e", "g"
    #[arg(long)]
    pub x_format: Option<String>,
    #[arg(long)]
    pub y_format: Option<String>,

    #[arg(long)]
    pub x_grid: bool,
    #[arg(long)]
    pub y_grid: bool,

    /// Draw ticks outside the plot area as well
    #[arg(long)]
    pub ticks_out: bool,

    /// Theme preset (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Fill the region with the theme background
    #[arg(long)]
    pub background: bool,

    #[arg(long)]
    pub stroke_width: Option<f64>,
    /// px, pt, pc, mm, cm or in
    #[arg(long)]
    pub stroke_unit: Option<LengthUnit>,

    /// Attach the plotted values to the SVG as a data-values attribute
    #[arg(long)]
    pub store_data: bool,
}
