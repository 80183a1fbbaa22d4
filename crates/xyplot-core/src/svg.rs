// File: crates/xyplot-core/src/svg.rs
// Summary: Serialize a Scene into a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use crate::clip::PathSegment;
use crate::scene::{Group, Node, Primitive, Scene};
use crate::theme::{LineCap, LineJoin, StrokeStyle, TextAnchor, TextStyle};

/// Path data for a clipped polyline: one `M` per segment followed by `L`s.
pub fn path_data(segments: &[PathSegment]) -> String {
    let mut d = String::new();
    for seg in segments {
        for (i, p) in seg.points.iter().enumerate() {
            if !d.is_empty() {
                d.push(' ');
            }
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{},{}", p.x, p.y);
        }
    }
    d
}

/// Render `scene` as an SVG document sized to its viewport.
pub fn to_svg_string(scene: &Scene) -> String {
    let v = &scene.viewport;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        v.left,
        v.top,
        v.width(),
        v.height(),
        v.width(),
        v.height()
    );
    write_group(&mut out, &scene.root, 1);
    out.push_str("</svg>\n");
    out
}

/// Write the SVG document for `scene` to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg_string(scene))
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_group(out: &mut String, group: &Group, depth: usize) {
    indent(out, depth);
    let _ = write!(out, r#"<g class="{}""#, group.role.class_name());
    if let Some(values) = &group.data_values {
        let _ = write!(out, r#" data-values="{}""#, escape_xml(values));
    }
    out.push_str(">\n");
    for node in &group.children {
        match node {
            Node::Group(g) => write_group(out, g, depth + 1),
            Node::Shape(p) => {
                indent(out, depth + 1);
                write_primitive(out, p);
                out.push('\n');
            }
        }
    }
    indent(out, depth);
    out.push_str("</g>\n");
}

fn write_primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Line { from, to, stroke } => {
            let _ = write!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}" style="{}"/>"#, from.x, from.y, to.x, to.y, stroke_css(stroke));
        }
        Primitive::Path { segments, stroke } => {
            let _ = write!(out, r#"<path d="{}" style="{}"/>"#, path_data(segments), stroke_css(stroke));
        }
        Primitive::Text { at, text, style, rotation } => {
            let _ = write!(out, r#"<text x="{}" y="{}" style="{}""#, at.x, at.y, text_css(style));
            if *rotation != 0.0 {
                let _ = write!(out, r#" transform="rotate({},{},{})""#, rotation, at.x, at.y);
            }
            let _ = write!(out, ">{}</text>", escape_xml(text));
        }
        Primitive::Rect { region, fill, stroke } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" style=""#,
                region.left,
                region.top,
                region.width(),
                region.height()
            );
            match fill {
                Some(c) => {
                    let _ = write!(out, "fill:{};fill-opacity:{}", c.to_hex(), c.opacity());
                }
                None => out.push_str("fill:none"),
            }
            match stroke {
                Some(s) => {
                    let _ = write!(out, ";{}", stroke_css(s).trim_start_matches("fill:none;"));
                }
                None => out.push_str(";stroke:none"),
            }
            out.push_str(r#""/>"#);
        }
    }
}

fn stroke_css(s: &StrokeStyle) -> String {
    let cap = match s.cap {
        LineCap::Butt => "butt",
        LineCap::Square => "square",
        LineCap::Round => "round",
    };
    let join = match s.join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
        LineJoin::Bevel => "bevel",
    };
    let mut css = format!(
        "fill:none;stroke:{};stroke-width:{};stroke-linecap:{};stroke-linejoin:{}",
        s.color.to_hex(),
        s.width,
        cap,
        join
    );
    if s.color.a != 255 {
        let _ = write!(css, ";stroke-opacity:{}", s.color.opacity());
    }
    css
}

fn text_css(t: &TextStyle) -> String {
    let (align, anchor) = match t.anchor {
        TextAnchor::Start => ("start", "start"),
        TextAnchor::Middle => ("center", "middle"),
        TextAnchor::End => ("end", "end"),
    };
    format!(
        "font-size:{}px;fill:{};fill-opacity:{};stroke:none;text-align:{};text-anchor:{};font-weight:normal;font-style:normal",
        t.font_size,
        t.fill.to_hex(),
        t.fill.opacity(),
        align,
        anchor
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
