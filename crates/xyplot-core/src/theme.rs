// File: crates/xyplot-core/src/theme.rs
// Summary: Light/Dark theming and the derived stroke/text styles used by the assembler.

use crate::error::PlotError;

/// Straight RGBA color, renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, alpha is emitted separately as an opacity.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Square,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Stroke attributes for lines and paths. Paths are never filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, cap: LineCap::Butt, join: LineJoin::Round }
    }
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub fill: Color,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn new(font_size: f64, fill: Color, anchor: TextAnchor) -> Self {
        Self { font_size, fill, anchor }
    }
}

/// Every style the assembler hands out, derived from one theme and one stroke width.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub path: StrokeStyle,
    pub border: StrokeStyle,
    pub tick: StrokeStyle,
    pub subtick: StrokeStyle,
    pub grid: StrokeStyle,
    pub subgrid: StrokeStyle,
    /// Right-aligned text (y tick labels).
    pub text_end: TextStyle,
    /// Centered text (x tick labels, axis labels).
    pub text_middle: TextStyle,
    pub title: TextStyle,
    pub background: Option<Color>,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub ink: Color,
    pub grid: Color,
    pub text: Color,
}

impl Theme {
    /// Black ink on white, grid in #999.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            ink: Color::BLACK,
            grid: Color::from_rgb(0x99, 0x99, 0x99),
            text: Color::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            ink: Color::from_rgb(235, 235, 245),
            grid: Color::from_rgb(90, 90, 100),
            text: Color::from_rgb(235, 235, 245),
        }
    }

    /// Derive the style sheet for a base stroke width `lw` and label font size.
    /// `with_background` adds a filled rect behind the plot.
    pub fn style_sheet(&self, lw: f64, font_size: f64, with_background: bool) -> StyleSheet {
        let path = StrokeStyle::solid(self.ink, lw);
        let border = path.with_cap(LineCap::Square);
        let grid = border.with_color(self.grid);
        let text_end = TextStyle::new(font_size, self.text, TextAnchor::End);
        let text_middle = TextStyle { anchor: TextAnchor::Middle, ..text_end };
        StyleSheet {
            path,
            border,
            tick: border.with_width(lw * 0.6),
            subtick: border.with_width(lw * 0.3),
            grid: grid.with_width(lw * 0.5),
            subgrid: grid.with_width(lw * 0.2),
            text_end,
            text_middle,
            title: TextStyle { font_size: 2.0 * font_size, ..text_middle },
            background: with_background.then_some(self.background),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Result<Theme, PlotError> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PlotError::UnknownTheme(name.to_string()))
}
