use criterion::{criterion_group, criterion_main, Criterion, black_box};
use xyplot_core::{to_svg_string, Chart, PlotOptions, Region, Series};

fn build_chart(n: usize) -> Chart {
    let mut series = Series::new(2);
    for i in 0..n {
        let x = i as f64;
        series.push(x, vec![(x * 0.01).sin() * 10.0, (x * 0.003).cos() * 4.0]).unwrap();
    }
    let mut options = PlotOptions::default();
    options.x.grid = true;
    options.y.grid = true;
    options.x.subticks = 4;
    Chart::new(series, options).unwrap()
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let region = Region::from_ltwh(80.0, 40.0, 800.0, 500.0);
    for &n in &[10_000usize, 50_000usize] {
        let chart = build_chart(n);
        group.bench_function(format!("scene_{n}"), |b| {
            b.iter(|| black_box(chart.build_scene(region).unwrap()));
        });
        group.bench_function(format!("svg_{n}"), |b| {
            b.iter(|| black_box(to_svg_string(&chart.build_scene(region).unwrap())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
