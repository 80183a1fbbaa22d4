// File: crates/demo/src/main.rs
// Summary: xyplot CLI. Loads CSV columns, assembles the plot, writes SVG and optionally PNG.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use xyplot_core::{write_svg, Chart};
use xyplot_demo::{read_series, Args, FileConfig};
use xyplot_render_skia::{RasterOptions, SkiaRenderer};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => FileConfig::load_from_file(path)?,
        None => FileConfig::default(),
    };
    config.apply_args(&args);

    let file = std::fs::File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let loaded = read_series(file, &config.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    info!(
        rows = loaded.series.len(),
        skipped = loaded.skipped.len(),
        "loaded {}",
        args.input.display()
    );

    let chart = Chart::new(loaded.series, config.plot)?;
    let scene = chart.build_scene(config.region.region())?;

    write_svg(&scene, &args.output).with_context(|| format!("writing {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());

    if let Some(png) = &args.png {
        let opts = RasterOptions { scale: args.png_scale, ..RasterOptions::default() };
        SkiaRenderer::new()
            .render_to_png(&scene, &opts, png)
            .with_context(|| format!("writing {}", png.display()))?;
        info!("Wrote {}", png.display());
    }
    Ok(())
}
