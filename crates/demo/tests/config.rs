// File: crates/demo/tests/config.rs
// Purpose: Config file parsing and CLI overrides.

use clap::Parser;
use xyplot_core::LengthUnit;
use xyplot_demo::{Args, FileConfig};

const TOML: &str = r#"
[input]
delimiter = ","
y_columns = "1,3"
skip_rows = 1

[region]
width = 640.0

[plot]
theme = "dark"

[plot.x]
grid = true
min = 0.0

[plot.labels]
title = "From file"
"#;

#[test]
fn file_values_and_defaults() {
    let cfg = FileConfig::from_toml(TOML).unwrap();
    assert_eq!(cfg.input.delimiter_byte().unwrap(), b',');
    assert_eq!(cfg.input.layout().unwrap().ys, vec![1, 3]);
    assert_eq!(cfg.region.width, 640.0);
    assert_eq!(cfg.region.height, 300.0);
    assert!(cfg.plot.x.grid);
    assert_eq!(cfg.plot.labels.title, "From file");
    assert_eq!(cfg.plot.y.ticks, 10);
}

#[test]
fn unknown_table_is_rejected() {
    assert!(FileConfig::from_toml("[output]\npath = \"x.svg\"\n").is_err());
    assert!(FileConfig::from_toml("[plot.x]\ngird = true\n").is_err());
}

#[test]
fn flags_override_file() {
    let mut cfg = FileConfig::from_toml(TOML).unwrap();
    let args = Args::parse_from([
        "xyplot",
        "data.csv",
        "--title",
        "From flags",
        "--x-min",
        "-5",
        "--y-ticks",
        "4",
        "--ticks-out",
        "--stroke-width",
        "0.5",
        "--stroke-unit",
        "mm",
        "--y-columns",
        "2",
    ]);
    cfg.apply_args(&args);
    assert_eq!(cfg.plot.labels.title, "From flags");
    assert_eq!(cfg.plot.x.min, Some(-5.0));
    assert_eq!(cfg.plot.y.ticks, 4);
    assert!(cfg.plot.x.ticks_out && cfg.plot.y.ticks_out);
    assert_eq!(cfg.plot.stroke.unit, LengthUnit::Mm);
    assert_eq!(cfg.input.y_columns, "2");
    // untouched by flags
    assert!(cfg.plot.x.grid);
    assert_eq!(cfg.plot.theme, "dark");
    assert_eq!(cfg.input.skip_rows, 1);
}

#[test]
fn defaults_without_file() {
    let mut cfg = FileConfig::default();
    cfg.apply_args(&Args::parse_from(["xyplot", "in.csv"]));
    assert_eq!(cfg, FileConfig::default());
}
