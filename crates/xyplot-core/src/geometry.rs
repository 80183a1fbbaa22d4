// File: crates/xyplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for drawing-space math (points, regions).

use std::ops::{Add, Mul, Sub};

/// A point (or displacement) in drawing space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation written so that `t == 0` yields `self` and `t == 1`
    /// yields `other` bit-for-bit.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point { Point::new(self.x * k, self.y * k) }
}

/// The drawing region a plot is anchored to, in drawing-space units.
/// `top < bottom`: y grows downward like every SVG/raster canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    pub fn top_left(&self) -> Point { Point::new(self.left, self.top) }
    pub fn top_right(&self) -> Point { Point::new(self.right, self.top) }
    pub fn bottom_left(&self) -> Point { Point::new(self.left, self.bottom) }
    pub fn bottom_right(&self) -> Point { Point::new(self.right, self.bottom) }

    /// Fails for empty, inverted or non-finite regions.
    pub fn validate(&self) -> crate::Result<()> {
        let (w, h) = (self.width(), self.height());
        if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 {
            Ok(())
        } else {
            Err(crate::PlotError::DegenerateRegion { width: w, height: h })
        }
    }
}
