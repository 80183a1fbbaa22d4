// File: crates/xyplot-core/src/scale.rs
// Summary: Affine data-space to drawing-space transform anchored to a drawing region.

use crate::clip::Window;
use crate::geometry::{Point, Region};

/// Logical X coordinate (data units).
pub type Logical = f64;
/// Value Y coordinate (data units).
pub type Value = f64;

/// General data to screen transform for the X/Y axes.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: Logical) -> f64;
    fn to_screen_y(&self, y: Value) -> f64;
    fn from_screen_x(&self, px: f64) -> Logical;
    fn from_screen_y(&self, py: f64) -> Value;

    fn to_screen(&self, p: Point) -> Point {
        Point::new(self.to_screen_x(p.x), self.to_screen_y(p.y))
    }
}

/// Maps the visible window onto `region`: `x_min` to the left edge, `y_min` to the
/// bottom edge (drawing-space y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct PlotTransform {
    pub region: Region,
    pub window: Window,
}

impl PlotTransform {
    pub fn new(region: Region, window: Window) -> Self {
        Self { region, window }
    }
}

impl ScaleTransform for PlotTransform {
    #[inline]
    fn to_screen_x(&self, x: Logical) -> f64 {
        let w = &self.window;
        (x - w.x_min) * self.region.width() / (w.x_max - w.x_min) + self.region.left
    }
    #[inline]
    fn to_screen_y(&self, y: Value) -> f64 {
        let w = &self.window;
        (w.y_max - y) * self.region.height() / (w.y_max - w.y_min) + self.region.top
    }
    fn from_screen_x(&self, px: f64) -> Logical {
        let w = &self.window;
        w.x_min + (px - self.region.left) / self.region.width() * (w.x_max - w.x_min)
    }
    fn from_screen_y(&self, py: f64) -> Value {
        let w = &self.window;
        w.y_max - (py - self.region.top) / self.region.height() * (w.y_max - w.y_min)
    }
}
