// File: crates/xyplot-core/src/scene.rs
// Summary: Output tree of styled drawing primitives, grouped by semantic role.

use crate::clip::PathSegment;
use crate::error::AxisKind;
use crate::geometry::{Point, Region};
use crate::theme::{Color, StrokeStyle, TextStyle};

/// One drawing primitive: kind + geometry + style.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, stroke: StrokeStyle },
    /// Polyline made of independent strokes; each segment starts with a move.
    Path { segments: Vec<PathSegment>, stroke: StrokeStyle },
    /// `rotation` is in degrees, about `at`.
    Text { at: Point, text: String, style: TextStyle, rotation: f64 },
    Rect { region: Region, fill: Option<Color>, stroke: Option<StrokeStyle> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Line,
    Path,
    Text,
    Rect,
}

impl Primitive {
    pub fn line(from: Point, to: Point, stroke: StrokeStyle) -> Self {
        Primitive::Line { from, to, stroke }
    }

    pub fn path(segments: Vec<PathSegment>, stroke: StrokeStyle) -> Self {
        Primitive::Path { segments, stroke }
    }

    pub fn text(at: Point, text: impl Into<String>, style: TextStyle) -> Self {
        Primitive::Text { at, text: text.into(), style, rotation: 0.0 }
    }

    /// Text rotated by `degrees` about its anchor point.
    pub fn rotated_text(at: Point, text: impl Into<String>, style: TextStyle, degrees: f64) -> Self {
        Primitive::Text { at, text: text.into(), style, rotation: degrees }
    }

    pub fn filled_rect(region: Region, fill: Color) -> Self {
        Primitive::Rect { region, fill: Some(fill), stroke: None }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Line { .. } => PrimitiveKind::Line,
            Primitive::Path { .. } => PrimitiveKind::Path,
            Primitive::Text { .. } => PrimitiveKind::Text,
            Primitive::Rect { .. } => PrimitiveKind::Rect,
        }
    }
}

/// What a group of primitives represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Plot,
    Background,
    Grid(AxisKind),
    SubGrid(AxisKind),
    Ticks(AxisKind),
    SubTicks(AxisKind),
    TickLabels(AxisKind),
    /// Data path of the y column with this index.
    Series(usize),
    Borders,
    Labels,
}

impl Role {
    /// Stable, CSS-friendly name (`grid-x`, `series-0`, ...).
    pub fn class_name(&self) -> String {
        match self {
            Role::Plot => "xyplot".to_string(),
            Role::Background => "background".to_string(),
            Role::Grid(a) => format!("grid-{a}"),
            Role::SubGrid(a) => format!("subgrid-{a}"),
            Role::Ticks(a) => format!("ticks-{a}"),
            Role::SubTicks(a) => format!("subticks-{a}"),
            Role::TickLabels(a) => format!("ticklabels-{a}"),
            Role::Series(i) => format!("series-{i}"),
            Role::Borders => "borders".to_string(),
            Role::Labels => "labels".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Shape(Primitive),
}

impl From<Group> for Node {
    fn from(g: Group) -> Self { Node::Group(g) }
}

impl From<Primitive> for Node {
    fn from(p: Primitive) -> Self { Node::Shape(p) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub role: Role,
    pub children: Vec<Node>,
    /// Serialized source values, attached when the caller asks to store them.
    pub data_values: Option<String>,
}

impl Group {
    pub fn new(role: Role) -> Self {
        Self { role, children: Vec::new(), data_values: None }
    }

    /// Group holding `shapes` directly.
    pub fn with_shapes(role: Role, shapes: impl IntoIterator<Item = Primitive>) -> Self {
        Self { role, children: shapes.into_iter().map(Node::Shape).collect(), data_values: None }
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn is_empty(&self) -> bool { self.children.is_empty() }

    /// Direct child group with `role`.
    pub fn child(&self, role: Role) -> Option<&Group> {
        self.children.iter().find_map(|n| match n {
            Node::Group(g) if g.role == role => Some(g),
            _ => None,
        })
    }

    /// All primitives below this group, depth-first in paint order.
    pub fn primitives(&self) -> Vec<&Primitive> {
        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}

fn collect<'a>(group: &'a Group, out: &mut Vec<&'a Primitive>) {
    for node in &group.children {
        match node {
            Node::Group(g) => collect(g, out),
            Node::Shape(p) => out.push(p),
        }
    }
}

/// A finished plot: the primitive tree plus the geometry it was built for.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// The drawing region the axes are anchored to.
    pub region: Region,
    /// Area covering the region plus the space used by tick labels and axis labels.
    pub viewport: Region,
    pub root: Group,
}
