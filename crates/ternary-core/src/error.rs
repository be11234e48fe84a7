// File: crates/ternary-core/src/error.rs
// Summary: Error type for element-wise projection and rendering.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TernaryError>;

#[derive(Error, Debug)]
pub enum TernaryError {
    /// Element-wise projection over slices of different lengths.
    #[error("length mismatch: upper={upper}, right={right}, left={left}")]
    LengthMismatch { upper: usize, right: usize, left: usize },

    /// Element-wise projection over arrays of different shapes.
    #[error("shape mismatch: upper={upper:?}, right={right:?}, left={left:?}")]
    ShapeMismatch { upper: Vec<usize>, right: Vec<usize>, left: Vec<usize> },

    /// Polyline coordinates of different lengths.
    #[error("plot length mismatch: xs={xs}, ys={ys}")]
    PlotLength { xs: usize, ys: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels from raster surface")]
    ReadPixels,

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
