// File: crates/ternary-core/src/diagram.rs
// Summary: No-fuss ternary diagram: outer triangle, 0.2-step gridlines and apex labels on a fresh Figure.

use tracing::{debug, warn};

use crate::artist::{HAlign, LineStyle, TextStyle, VAlign};
use crate::figure::{Figure, FigureOptions};
use crate::geometry::Point;
use crate::grid::{boundary, gridlines};

pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const UPPER_LABEL_POS: Point = (0.5, 0.91);
pub const RIGHT_LABEL_POS: Point = (1.05, -0.01);
pub const LEFT_LABEL_POS: Point = (-0.05, -0.01);

pub const BOUNDARY_WIDTH: f32 = 2.0;
pub const GRID_WIDTH: f32 = 1.0;
/// Boundary and labels sit above anything drawn with default z-orders.
pub const BOUNDARY_Z: f32 = 11.0;
pub const GRID_Z: f32 = 1.0;

/// Build a minimal ternary diagram and return the figure for further plotting.
///
/// Points and lines added afterwards must already be projected, see
/// [`project`](crate::project::project). Axis decorations are off and the aspect ratio is equal.
///
/// Labels are drawn only when `upper_label` is set. In that case all three
/// apex labels are drawn; a missing `left_label` or `right_label` becomes an
/// empty text and a warning is logged.
pub fn ternary(
    upper_label: Option<&str>,
    left_label: Option<&str>,
    right_label: Option<&str>,
    options: FigureOptions,
) -> Figure {
    let grid = gridlines();
    let theme = options.theme;
    let mut fig = Figure::new(options);
    let ax = fig.axes_mut();

    let boundary_style = LineStyle::new(theme.boundary, BOUNDARY_WIDTH).with_z_order(BOUNDARY_Z);
    for seg in &boundary() {
        ax.segment(seg, boundary_style);
    }

    let grid_style = LineStyle::new(theme.grid, GRID_WIDTH).with_z_order(GRID_Z);
    for seg in &grid {
        ax.segment(seg, grid_style);
    }

    if let Some(upper) = upper_label {
        // TODO: decide whether side labels should be independent of the upper label.
        if left_label.is_none() || right_label.is_none() {
            warn!(
                left = left_label.is_some(),
                right = right_label.is_some(),
                "upper label set without both side labels; drawing empty side labels"
            );
        }
        let style = TextStyle {
            size: LABEL_FONT_SIZE,
            color: theme.label,
            h_align: HAlign::Center,
            v_align: VAlign::Top,
            z_order: BOUNDARY_Z,
        };
        ax.text(UPPER_LABEL_POS.0, UPPER_LABEL_POS.1, upper, style);
        ax.text(RIGHT_LABEL_POS.0, RIGHT_LABEL_POS.1, right_label.unwrap_or_default(), style);
        ax.text(LEFT_LABEL_POS.0, LEFT_LABEL_POS.1, left_label.unwrap_or_default(), style);
    }

    ax.set_axis_off();
    ax.set_aspect_equal(true);

    debug!(
        gridlines = grid.len(),
        labels = fig.axes.texts().count(),
        "built ternary figure"
    );
    fig
}
