// File: crates/ternary-core/tests/diagram.rs
// Purpose: Validate ternary figure construction: boundary, gridlines, labels, axis config and draw order.

use ternary_core::diagram::{BOUNDARY_Z, GRID_Z, LABEL_FONT_SIZE};
use ternary_core::{project, ternary, Artist, FigureOptions, HAlign, LineStyle, MarkerStyle, Theme, VAlign};

fn boundary_count(fig: &ternary_core::Figure) -> usize {
    fig.axes.lines().filter(|l| l.style.z_order == BOUNDARY_Z).count()
}

fn grid_count(fig: &ternary_core::Figure) -> usize {
    fig.axes.lines().filter(|l| l.style.z_order == GRID_Z).count()
}

#[test]
fn no_labels_by_default() {
    let fig = ternary(None, None, None, FigureOptions::default());
    assert_eq!(boundary_count(&fig), 3);
    assert_eq!(grid_count(&fig), 12);
    assert_eq!(fig.axes.lines().count(), 15);
    assert_eq!(fig.axes.texts().count(), 0);
}

#[test]
fn side_labels_alone_are_not_drawn() {
    let fig = ternary(None, Some("B"), Some("C"), FigureOptions::default());
    assert_eq!(fig.axes.texts().count(), 0);
}

#[test]
fn upper_label_draws_all_three() {
    let fig = ternary(Some("Qz"), Some("Fsp"), Some("Lt"), FigureOptions::default());
    let texts: Vec<_> = fig.axes.texts().collect();
    assert_eq!(texts.len(), 3);

    assert_eq!(texts[0].text, "Qz");
    assert_eq!((texts[0].x, texts[0].y), (0.5, 0.91));
    assert_eq!(texts[1].text, "Lt");
    assert_eq!((texts[1].x, texts[1].y), (1.05, -0.01));
    assert_eq!(texts[2].text, "Fsp");
    assert_eq!((texts[2].x, texts[2].y), (-0.05, -0.01));

    for t in texts {
        assert_eq!(t.style.size, LABEL_FONT_SIZE);
        assert_eq!(t.style.h_align, HAlign::Center);
        assert_eq!(t.style.v_align, VAlign::Top);
        assert_eq!(t.style.z_order, BOUNDARY_Z);
    }
}

#[test]
fn upper_label_alone_still_draws_three_texts() {
    let fig = ternary(Some("A"), None, None, FigureOptions::default());
    let texts: Vec<_> = fig.axes.texts().collect();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[0].text, "A");
    assert!(texts[1].text.is_empty());
    assert!(texts[2].text.is_empty());
}

#[test]
fn axis_off_and_equal_aspect() {
    let fig = ternary(None, None, None, FigureOptions::default());
    assert!(!fig.axes.axis_on());
    assert!(fig.axes.aspect_equal());
}

#[test]
fn options_are_forwarded() {
    let opts = FigureOptions::default().with_size(300, 200).with_theme(Theme::dark());
    let fig = ternary(None, None, None, opts);
    assert_eq!((fig.options.width, fig.options.height), (300, 200));
    assert_eq!(fig.options.theme.name, "dark");
    let boundary = fig.axes.lines().find(|l| l.style.z_order == BOUNDARY_Z).expect("boundary");
    assert_eq!(boundary.style.color, Theme::dark().boundary);
    assert_eq!(boundary.style.width, 2.0);
}

#[test]
fn gridlines_draw_below_boundary() {
    let fig = ternary(Some("A"), Some("B"), Some("C"), FigureOptions::default());
    let order = fig.axes.draw_order();
    let first_boundary = order.iter().position(|a| a.z_order() == BOUNDARY_Z).expect("boundary drawn");
    let last_grid = order.iter().rposition(|a| a.z_order() == GRID_Z).expect("grid drawn");
    assert!(last_grid < first_boundary);
}

#[test]
fn caller_can_add_projected_points() {
    let mut fig = ternary(Some("A"), Some("B"), Some("C"), FigureOptions::default());
    let pts = vec![project(20.0, 10.5, 3.2), project(1.0, 1.0, 1.0)];
    fig.axes_mut().scatter(&pts, MarkerStyle::default());
    fig.axes_mut().plot_points(&pts, LineStyle::default());

    let added: Vec<_> = fig.axes.artists().iter().skip(18).collect();
    assert!(matches!(added[0], Artist::Markers(m) if m.points.len() == 2));
    assert!(matches!(added[1], Artist::Line(l) if l.xs.len() == 2));

    // data range covers the triangle, with a margin
    let b = fig.axes.data_bounds();
    assert!(b.x_min < 0.0 && b.x_max > 1.0);
    assert!(b.y_min < 0.0 && b.y_max > 0.8660254);
}
