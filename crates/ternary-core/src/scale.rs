// File: crates/ternary-core/src/scale.rs
// Summary: Data-to-pixel transform fitting data bounds into a pixel rectangle, with optional equal aspect.

use crate::geometry::{Bounds, PixelRect, Point};

/// Linear mapping from data space (y up) to pixel space (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataTransform {
    pub bounds: Bounds,
    /// Pixel x of `bounds.x_min`.
    pub left_px: f64,
    /// Pixel y of `bounds.y_min`.
    pub bottom_px: f64,
    /// Pixels per data unit along x.
    pub sx: f64,
    /// Pixels per data unit along y.
    pub sy: f64,
}

impl DataTransform {
    /// Fit `bounds` into `rect`. With `equal_aspect` both axes use the smaller
    /// scale and the data is centred in the leftover space.
    pub fn fit(bounds: Bounds, rect: PixelRect, equal_aspect: bool) -> Self {
        let w = (rect.width() as f64).max(1.0);
        let h = (rect.height() as f64).max(1.0);
        let dx = bounds.width().abs().max(1e-12);
        let dy = bounds.height().abs().max(1e-12);

        let (mut sx, mut sy) = (w / dx, h / dy);
        if equal_aspect {
            let s = sx.min(sy);
            sx = s;
            sy = s;
        }
        let left_px = rect.left as f64 + (w - dx * sx) * 0.5;
        let bottom_px = rect.bottom as f64 - (h - dy * sy) * 0.5;
        Self { bounds, left_px, bottom_px, sx, sy }
    }

    #[inline]
    pub fn to_px(&self, p: Point) -> (f32, f32) {
        (
            (self.left_px + (p.0 - self.bounds.x_min) * self.sx) as f32,
            (self.bottom_px - (p.1 - self.bounds.y_min) * self.sy) as f32,
        )
    }

    #[inline]
    pub fn from_px(&self, px: f32, py: f32) -> Point {
        (
            self.bounds.x_min + (px as f64 - self.left_px) / self.sx,
            self.bounds.y_min + (self.bottom_px - py as f64) / self.sy,
        )
    }

    /// Pixel rectangle covered by the data bounds.
    pub fn plot_rect(&self) -> PixelRect {
        let (l, b) = self.to_px((self.bounds.x_min, self.bounds.y_min));
        let (r, t) = self.to_px((self.bounds.x_max, self.bounds.y_max));
        PixelRect::from_ltrb(l, t, r, b)
    }
}
