// File: crates/xyplot-core/tests/theme.rs
// Purpose: Theme lookup and the style sheet derived from a base stroke width.

use xyplot_core::theme::{self, LineCap, LineJoin};
use xyplot_core::{Color, PlotError, TextAnchor, Theme};

#[test]
fn light_sheet_scales_from_line_width() {
    let s = Theme::light().style_sheet(2.0, 10.0, false);
    assert_eq!(s.path.width, 2.0);
    assert_eq!((s.path.cap, s.path.join), (LineCap::Butt, LineJoin::Round));
    assert_eq!(s.border.cap, LineCap::Square);
    assert!((s.tick.width - 1.2).abs() < 1e-12);
    assert!((s.subtick.width - 0.6).abs() < 1e-12);
    assert_eq!(s.grid.width, 1.0);
    assert!((s.subgrid.width - 0.4).abs() < 1e-12);
    assert_eq!(s.grid.color.to_hex(), "#999999");
    assert_eq!(s.text_end.anchor, TextAnchor::End);
    assert_eq!(s.text_middle.anchor, TextAnchor::Middle);
    assert_eq!(s.title.font_size, 20.0);
    assert_eq!(s.background, None);
}

#[test]
fn background_only_when_requested() {
    let s = Theme::dark().style_sheet(1.0, 10.0, true);
    assert_eq!(s.background, Some(Theme::dark().background));
    assert_ne!(s.path.color, Color::BLACK);
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(theme::find("DARK").unwrap().name, "dark");
    assert_eq!(theme::presets().len(), 2);
    assert!(matches!(theme::find("sepia"), Err(PlotError::UnknownTheme(name)) if name == "sepia"));
}

#[test]
fn colors_render_as_hex_and_opacity() {
    let c = Color::from_argb(128, 255, 0, 16);
    assert_eq!(c.to_hex(), "#ff0010");
    assert!((c.opacity() - 128.0 / 255.0).abs() < 1e-12);
}
