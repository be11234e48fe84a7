// File: crates/ternary-core/src/geometry.rs
// Summary: Points, gridline segments, data bounds and pixel rectangles.

use crate::project::{project_x, project_y};
use crate::types::Insets;

/// Cartesian point in data space, `(x, y)`.
pub type Point = (f64, f64);

/// Straight segment between two Cartesian points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment between two `(upper, right, left)` triples, projected without
    /// normalization; callers pass fractions that already sum to one.
    pub fn from_ternary(start: (f64, f64, f64), end: (f64, f64, f64)) -> Self {
        Self {
            start: (project_x(start.0, start.1, start.2), project_y(start.0, start.1, start.2)),
            end: (project_x(end.0, end.1, end.2), project_y(end.0, end.1, end.2)),
        }
    }

    pub fn xs(&self) -> [f64; 2] { [self.start.0, self.end.0] }
    pub fn ys(&self) -> [f64; 2] { [self.start.1, self.end.1] }

    pub fn length(&self) -> f64 {
        (self.end.0 - self.start.0).hypot(self.end.1 - self.start.1)
    }
}

/// Axis-aligned data bounds. Starts empty (inverted infinities) and grows with
/// every finite point included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub const fn empty() -> Self {
        Self::new(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY)
    }

    /// Grow to contain `p`; NaN and infinite coordinates are ignored.
    pub fn include(&mut self, p: Point) {
        if !p.0.is_finite() || !p.1.is_finite() {
            return;
        }
        self.x_min = self.x_min.min(p.0);
        self.x_max = self.x_max.max(p.0);
        self.y_min = self.y_min.min(p.1);
        self.y_max = self.y_max.max(p.1);
    }

    pub fn is_empty(&self) -> bool {
        !(self.x_min <= self.x_max && self.y_min <= self.y_max)
    }

    pub fn width(&self) -> f64 { self.x_max - self.x_min }
    pub fn height(&self) -> f64 { self.y_max - self.y_min }

    /// Expand each side by `frac` of the span; degenerate spans get a unit span first.
    pub fn with_margin(mut self, frac: f64) -> Self {
        if self.width().abs() < 1e-12 {
            self.x_min -= 0.5;
            self.x_max += 0.5;
        }
        if self.height().abs() < 1e-12 {
            self.y_min -= 0.5;
            self.y_max += 0.5;
        }
        let mx = self.width() * frac;
        let my = self.height() * frac;
        Self::new(self.x_min - mx, self.x_max + mx, self.y_min - my, self.y_max + my)
    }
}

/// Pixel rectangle, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (collapses to the centre line instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let mut left = self.left + insets.left as f32;
        let mut right = self.right - insets.right as f32;
        let mut top = self.top + insets.top as f32;
        let mut bottom = self.bottom - insets.bottom as f32;
        if left > right {
            let mid = (left + right) * 0.5;
            left = mid;
            right = mid;
        }
        if top > bottom {
            let mid = (top + bottom) * 0.5;
            top = mid;
            bottom = mid;
        }
        Self { left, top, right, bottom }
    }
}
