// File: crates/ternary-core/src/axes.rs
// Summary: Axes model: an ordered list of artists plus axis configuration (decorations, aspect, limits).

use crate::artist::{Artist, Line2D, LineStyle, MarkerStyle, Markers, Text, TextStyle};
use crate::error::{Result, TernaryError};
use crate::geometry::{Bounds, Point, Segment};

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct Axes {
    artists: Vec<Artist>,
    axis_on: bool,
    aspect_equal: bool,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
}

impl Default for Axes {
    fn default() -> Self { Self::new() }
}

impl Axes {
    pub fn new() -> Self {
        Self { artists: Vec::new(), axis_on: true, aspect_equal: false, xlim: None, ylim: None }
    }

    /// Add a polyline. `xs` and `ys` must have the same length.
    pub fn plot(&mut self, xs: &[f64], ys: &[f64], style: LineStyle) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(TernaryError::PlotLength { xs: xs.len(), ys: ys.len() });
        }
        self.artists.push(Artist::Line(Line2D { xs: xs.to_vec(), ys: ys.to_vec(), style }));
        Ok(())
    }

    /// Add a polyline through already-projected points.
    pub fn plot_points(&mut self, points: &[Point], style: LineStyle) {
        let (xs, ys) = points.iter().copied().unzip();
        self.artists.push(Artist::Line(Line2D { xs, ys, style }));
    }

    pub fn segment(&mut self, segment: &Segment, style: LineStyle) {
        self.artists.push(Artist::Line(Line2D {
            xs: segment.xs().to_vec(),
            ys: segment.ys().to_vec(),
            style,
        }));
    }

    pub fn scatter(&mut self, points: &[Point], style: MarkerStyle) {
        self.artists.push(Artist::Markers(Markers { points: points.to_vec(), style }));
    }

    pub fn text(&mut self, x: f64, y: f64, text: impl Into<String>, style: TextStyle) {
        self.artists.push(Artist::Text(Text { x, y, text: text.into(), style }));
    }

    /// Hide frame and ticks.
    pub fn set_axis_off(&mut self) { self.axis_on = false; }
    pub fn set_axis_on(&mut self) { self.axis_on = true; }
    pub fn axis_on(&self) -> bool { self.axis_on }

    /// Force one data unit to span the same number of pixels on both axes.
    pub fn set_aspect_equal(&mut self, equal: bool) { self.aspect_equal = equal; }
    pub fn aspect_equal(&self) -> bool { self.aspect_equal }

    pub fn set_xlim(&mut self, min: f64, max: f64) { self.xlim = Some((min, max)); }
    pub fn set_ylim(&mut self, min: f64, max: f64) { self.ylim = Some((min, max)); }

    /// Artists in insertion order.
    pub fn artists(&self) -> &[Artist] { &self.artists }

    pub fn lines(&self) -> impl Iterator<Item = &Line2D> {
        self.artists.iter().filter_map(|a| match a { Artist::Line(l) => Some(l), _ => None })
    }

    pub fn markers(&self) -> impl Iterator<Item = &Markers> {
        self.artists.iter().filter_map(|a| match a { Artist::Markers(m) => Some(m), _ => None })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.artists.iter().filter_map(|a| match a { Artist::Text(t) => Some(t), _ => None })
    }

    /// Artists sorted by z-order, lowest first; ties keep insertion order.
    pub fn draw_order(&self) -> Vec<&Artist> {
        let mut order: Vec<&Artist> = self.artists.iter().collect();
        order.sort_by(|a, b| a.z_order().total_cmp(&b.z_order()));
        order
    }

    /// Visible data range: explicit limits where set, otherwise the finite
    /// extent of lines and markers plus [`AUTOSCALE_MARGIN`]. Falls back to
    /// the unit square when there is no finite data.
    pub fn data_bounds(&self) -> Bounds {
        let mut data = Bounds::empty();
        for a in &self.artists {
            a.extend_bounds(&mut data);
        }
        let auto = if data.is_empty() {
            Bounds::new(0.0, 1.0, 0.0, 1.0)
        } else {
            data.with_margin(AUTOSCALE_MARGIN)
        };
        let (x_min, x_max) = self.xlim.unwrap_or((auto.x_min, auto.x_max));
        let (y_min, y_max) = self.ylim.unwrap_or((auto.y_min, auto.y_max));
        Bounds::new(x_min, x_max, y_min, y_max)
    }
}
