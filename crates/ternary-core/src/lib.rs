// File: crates/ternary-core/src/lib.rs
// Summary: Core library entry point; exports ternary projection, diagram construction and rendering.

pub mod artist;
pub mod axes;
pub mod diagram;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod project;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use artist::{Artist, HAlign, LineStyle, MarkerStyle, TextStyle, VAlign};
pub use axes::Axes;
pub use diagram::ternary;
pub use error::{Result, TernaryError};
pub use figure::{Figure, FigureOptions, Layout};
pub use geometry::{Point, Segment};
pub use grid::{boundary, gridlines};
pub use project::{project, project_array, project_slices, project_x, project_y};
pub use theme::Theme;
pub use types::Insets;
