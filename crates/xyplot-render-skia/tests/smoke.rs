// File: crates/xyplot-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end raster smoke test writing a PNG and decoding it back.

use xyplot_core::{Chart, Color, PlotOptions, Region, Scene, Series};
use xyplot_render_skia::{RasterOptions, SkiaRenderer};

fn scene() -> Scene {
    // Minimal data: tiny line series
    let series = Series::from_xy([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]);
    let mut options = PlotOptions::default();
    options.x.grid = true;
    options.labels.title = "smoke".into();
    Chart::new(series, options)
        .and_then(|c| c.build_scene(Region::from_ltwh(80.0, 40.0, 300.0, 200.0)))
        .expect("assemble")
}

#[test]
fn render_smoke_png() {
    let scene = scene();
    let renderer = SkiaRenderer::new();
    let opts = RasterOptions::default();

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_png_bytes(&scene, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn surface_covers_viewport() {
    let scene = scene();
    let renderer = SkiaRenderer::new();
    let opts = RasterOptions::default();
    let (w, h) = opts.pixel_size(&scene.viewport);

    let img = image::load_from_memory(&renderer.render_png_bytes(&scene, &opts).unwrap())
        .expect("decode")
        .to_rgba8();
    assert_eq!((img.width() as i32, img.height() as i32), (w, h));
    // corner of the margin stays background, something got drawn somewhere
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert!(img.pixels().any(|p| p.0[0] < 128), "expected dark ink on the surface");

    let doubled = RasterOptions { scale: 2.0, ..opts };
    let img2 = image::load_from_memory(&renderer.render_png_bytes(&scene, &doubled).unwrap())
        .unwrap()
        .to_rgba8();
    assert_eq!(img2.width() as i32, doubled.pixel_size(&scene.viewport).0);
    assert!(img2.width() >= 2 * img.width() - 1);
}

#[test]
fn transparent_without_background() {
    let opts = RasterOptions { scale: 1.0, background: None };
    let bytes = SkiaRenderer::new().render_png_bytes(&scene(), &opts).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn rejects_bad_scale() {
    let opts = RasterOptions { scale: 0.0, background: Some(Color::WHITE) };
    assert!(SkiaRenderer::new().render_png_bytes(&scene(), &opts).is_err());
}
