// File: crates/xyplot-examples/src/bin/lines.rs
// Summary: Minimal example that plots two damped waves to SVG.

use xyplot_core::{write_svg, Chart, PlotOptions, Region, Series};

fn main() {
    // Two y columns sharing one x
    let mut series = Series::new(2);
    for i in 0..=200 {
        let t = i as f64 * 0.05;
        let decay = (-0.3 * t).exp();
        series
            .push(t, vec![decay * (2.0 * t).sin() * 3.0, decay * (2.0 * t).cos() * 3.0])
            .expect("two values per sample");
    }

    let mut options = PlotOptions::default();
    options.labels.title = "Damped oscillation".into();
    options.labels.x_axis = "t [s]".into();
    options.labels.y_axis = "amplitude".into();
    options.x.subticks = 4;
    options.y.grid = true;
    options.y.format = ".1f".into();

    let chart = Chart::new(series, options).expect("valid chart");
    let scene = chart.build_scene(Region::from_ltwh(0.0, 0.0, 480.0, 320.0)).expect("assemble");

    let out = std::path::PathBuf::from("target/out/example_lines.svg");
    write_svg(&scene, &out).expect("write svg");
    println!("Wrote {}", out.display());
}
