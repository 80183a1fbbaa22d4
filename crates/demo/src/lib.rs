// File: crates/demo/src/lib.rs
// Summary: Library half of the xyplot CLI: argument definitions, config file, CSV loading.

pub mod cli;
pub mod config;
pub mod input;

pub use cli::Args;
pub use config::{FileConfig, InputOptions, RegionOptions};
pub use input::{read_series, Loaded};
