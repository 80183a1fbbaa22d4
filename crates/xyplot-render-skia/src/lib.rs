// File: crates/xyplot-render-skia/src/lib.rs
// Summary: Skia renderer crate. Rasterizes an xyplot Scene on a CPU surface and encodes PNG.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use xyplot_core::theme::{LineCap, LineJoin};
use xyplot_core::{Color, Group, Node, Primitive, Region, Scene, StrokeStyle};

pub mod text;

pub use text::TextShaper;

/// Raster output settings.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Device pixels per drawing unit.
    pub scale: f32,
    /// Cleared before drawing; `None` leaves the surface transparent.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: Some(Color::WHITE) }
    }
}

impl RasterOptions {
    /// Pixel size of the surface for `viewport`.
    pub fn pixel_size(&self, viewport: &Region) -> (i32, i32) {
        let px = |v: f64| ((v * self.scale as f64).ceil() as i32).max(1);
        (px(viewport.width()), px(viewport.height()))
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render `scene` to PNG bytes. The surface covers the scene viewport.
    pub fn render_png_bytes(&self, scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
        if !(opts.scale.is_finite() && opts.scale > 0.0) {
            anyhow::bail!("raster scale must be positive, got {}", opts.scale);
        }
        let (width, height) = opts.pixel_size(&scene.viewport);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.background.map_or(skia::Color::TRANSPARENT, to_skia));
        canvas.scale((opts.scale, opts.scale));
        canvas.translate((-scene.viewport.left as f32, -scene.viewport.top as f32));
        self.draw_group(canvas, &scene.root);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width, height, bytes = data.as_bytes().len(), "rasterized scene");
        Ok(data.as_bytes().to_vec())
    }

    /// Render `scene` to a PNG file at `path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, opts: &RasterOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene, opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw_group(&self, canvas: &skia::Canvas, group: &Group) {
        for node in &group.children {
            match node {
                Node::Group(g) => self.draw_group(canvas, g),
                Node::Shape(p) => self.draw_primitive(canvas, p),
            }
        }
    }

    fn draw_primitive(&self, canvas: &skia::Canvas, prim: &Primitive) {
        match prim {
            Primitive::Line { from, to, stroke } => {
                canvas.draw_line(pt(from.x, from.y), pt(to.x, to.y), &stroke_paint(stroke));
            }
            Primitive::Path { segments, stroke } => {
                let mut path = skia::Path::new();
                for seg in segments {
                    let mut points = seg.points.iter();
                    if let Some(first) = points.next() {
                        path.move_to(pt(first.x, first.y));
                    }
                    for p in points {
                        path.line_to(pt(p.x, p.y));
                    }
                }
                canvas.draw_path(&path, &stroke_paint(stroke));
            }
            Primitive::Text { at, text, style, rotation } => {
                self.shaper.draw(
                    canvas,
                    text,
                    at.x as f32,
                    at.y as f32,
                    style.font_size as f32,
                    to_skia(style.fill),
                    style.anchor,
                    *rotation as f32,
                );
            }
            Primitive::Rect { region, fill, stroke } => {
                let rect = skia::Rect::from_ltrb(
                    region.left as f32,
                    region.top as f32,
                    region.right as f32,
                    region.bottom as f32,
                );
                if let Some(c) = fill {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Fill);
                    paint.set_color(to_skia(*c));
                    canvas.draw_rect(rect, &paint);
                }
                if let Some(s) = stroke {
                    canvas.draw_rect(rect, &stroke_paint(s));
                }
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn pt(x: f64, y: f64) -> skia::Point {
    skia::Point::new(x as f32, y as f32)
}

pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(s: &StrokeStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(to_skia(s.color));
    paint.set_stroke_cap(match s.cap {
        LineCap::Butt => skia::paint::Cap::Butt,
        LineCap::Square => skia::paint::Cap::Square,
        LineCap::Round => skia::paint::Cap::Round,
    });
    paint.set_stroke_join(match s.join {
        LineJoin::Miter => skia::paint::Join::Miter,
        LineJoin::Round => skia::paint::Join::Round,
        LineJoin::Bevel => skia::paint::Join::Bevel,
    });
    paint
}
