// File: crates/ternary-core/src/artist.rs
// Summary: Drawable primitives held by an Axes (lines, markers, text) and their styles.

use skia_safe as skia;

use crate::geometry::{Bounds, Point};

/// Default z-orders, lowest drawn first.
pub const Z_MARKERS: f32 = 1.0;
pub const Z_LINE: f32 = 2.0;
pub const Z_TEXT: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: skia::Color,
    /// Stroke width in pixels.
    pub width: f32,
    pub z_order: f32,
}

impl LineStyle {
    pub fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width, z_order: Z_LINE }
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = z_order;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(skia::Color::from_argb(255, 31, 119, 180), 1.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: skia::Color,
    /// Circle radius in pixels.
    pub radius: f32,
    pub z_order: f32,
}

impl MarkerStyle {
    pub fn new(color: skia::Color, radius: f32) -> Self {
        Self { color, radius, z_order: Z_MARKERS }
    }

    pub fn with_z_order(mut self, z_order: f32) -> Self {
        self.z_order = z_order;
        self
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::new(skia::Color::from_argb(255, 255, 127, 14), 3.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f32,
    pub color: skia::Color,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub z_order: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: skia::Color::from_argb(255, 0, 0, 0),
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
            z_order: Z_TEXT,
        }
    }
}

/// Polyline through `(xs[i], ys[i])`. A non-finite point breaks the line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line2D {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub style: LineStyle,
}

impl Line2D {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Circle markers; non-finite points are skipped when drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Markers {
    pub points: Vec<Point>,
    pub style: MarkerStyle,
}

/// Text anchored at a data-space point.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Artist {
    Line(Line2D),
    Markers(Markers),
    Text(Text),
}

impl Artist {
    pub fn z_order(&self) -> f32 {
        match self {
            Artist::Line(l) => l.style.z_order,
            Artist::Markers(m) => m.style.z_order,
            Artist::Text(t) => t.style.z_order,
        }
    }

    /// Grow `bounds` by this artist's data. Text does not take part in
    /// autoscaling; layout makes room for it instead.
    pub fn extend_bounds(&self, bounds: &mut Bounds) {
        match self {
            Artist::Line(l) => l.points().for_each(|p| bounds.include(p)),
            Artist::Markers(m) => m.points.iter().for_each(|&p| bounds.include(p)),
            Artist::Text(_) => {}
        }
    }
}
