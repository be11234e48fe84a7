// File: crates/ternary-core/tests/render.rs
// Purpose: End-to-end render smoke tests (PNG file, PNG bytes, RGBA buffer) and layout checks.

use ternary_core::{project, ternary, Axes, FigureOptions, Insets, Layout, LineStyle, MarkerStyle, Theme};

fn quiet_opts() -> FigureOptions {
    let mut opts = FigureOptions::default().with_size(320, 280);
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn render_smoke_png() {
    let mut fig = ternary(Some("A"), Some("B"), Some("C"), FigureOptions::default());
    fig.axes_mut().scatter(&[project(20.0, 10.5, 3.2)], MarkerStyle::default());

    let out = std::path::PathBuf::from("target/test_out/ternary_smoke.png");
    fig.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = fig.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let fig = ternary(None, None, None, quiet_opts());
    let (px, w, h, stride) = fig.render_to_rgba8().expect("rgba render");
    assert_eq!((w, h), (320, 280));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is outside the triangle: plain white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn boundary_pixels_are_dark() {
    let opts = quiet_opts().with_layout(Layout::Fixed(Insets::uniform(20)));
    let fig = ternary(None, None, None, opts);
    let tf = fig.transform();
    let (px, _w, _h, stride) = fig.render_to_rgba8().expect("rgba render");

    // Midpoint of the base edge
    let (x, y) = tf.to_px((0.5, 0.0));
    let i = y.round() as usize * stride + x.round() as usize * 4;
    assert!(px[i] < 128 && px[i + 1] < 128 && px[i + 2] < 128, "base edge should be dark: {:?}", &px[i..i + 4]);
}

#[test]
fn dark_theme_background() {
    let fig = ternary(None, None, None, quiet_opts().with_theme(Theme::dark()));
    let (px, ..) = fig.render_to_rgba8().expect("rgba render");
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn equal_aspect_keeps_triangle_equilateral() {
    let fig = ternary(None, None, None, quiet_opts().with_size(600, 200));
    let tf = fig.transform();
    assert_eq!(tf.sx, tf.sy);
    let (lx, ly) = tf.to_px((0.0, 0.0));
    let (rx, _) = tf.to_px((1.0, 0.0));
    let (_, ty) = tf.to_px((0.5, 0.8660254));
    let base = (rx - lx) as f64;
    let height = (ly - ty) as f64;
    assert!((height / base - 0.8660254).abs() < 1e-3);
}

#[test]
fn constrained_layout_keeps_labels_on_canvas() {
    let opts = FigureOptions::default().with_size(400, 360);
    let labelled = ternary(Some("Upper"), Some("Left component"), Some("Right component"), opts);
    let bare = ternary(None, None, None, opts);

    // Labels need room, so the labelled triangle is drawn smaller.
    assert!(labelled.transform().sx < bare.transform().sx);

    let tf = labelled.transform();
    let (lx, _) = tf.to_px((-0.05, -0.01));
    assert!(lx > 0.0);
}

#[test]
fn axis_on_draws_frame() {
    let mut opts = FigureOptions::default().with_size(120, 120).with_layout(Layout::Fixed(Insets::uniform(10)));
    opts.draw_labels = false;
    let mut fig = ternary_core::Figure::new(opts);
    fig.axes_mut().set_xlim(0.0, 1.0);
    fig.axes_mut().set_ylim(0.0, 1.0);
    fig.axes_mut().plot(&[0.25, 0.75], &[0.5, 0.5], LineStyle::default()).expect("equal lengths");

    let tf = fig.transform();
    let rect = tf.plot_rect();
    let (px, _w, _h, stride) = fig.render_to_rgba8().expect("rgba render");
    let i = ((rect.top + rect.bottom) * 0.5).round() as usize * stride + rect.left.round() as usize * 4;
    assert!(px[i] < 200, "frame should be visible at left edge: {:?}", &px[i..i + 4]);
}

#[test]
fn plot_rejects_length_mismatch() {
    let mut ax = Axes::new();
    assert!(ax.plot(&[0.0, 1.0], &[0.0], LineStyle::default()).is_err());
    assert_eq!(ax.artists().len(), 0);
}

#[test]
fn nan_points_do_not_break_rendering() {
    let mut fig = ternary(None, None, None, quiet_opts());
    let pts = vec![project(0.0, 0.0, 0.0), project(1.0, 1.0, 1.0)];
    fig.axes_mut().scatter(&pts, MarkerStyle::default());
    fig.axes_mut().plot_points(&pts, LineStyle::default());
    let b = fig.axes.data_bounds();
    assert!(b.x_min.is_finite() && b.y_max.is_finite());
    fig.render_to_png_bytes().expect("render with NaN points");
}

#[test]
fn turning_axis_back_on_draws_frame_around_triangle() {
    let opts = quiet_opts().with_layout(Layout::Fixed(Insets::uniform(20)));
    let mut fig = ternary(None, None, None, opts);
    let (plain, ..) = fig.render_to_rgba8().expect("rgba render");

    fig.axes_mut().set_axis_on();
    assert!(fig.axes.axis_on());
    let rect = fig.transform().plot_rect();
    let (framed, _w, _h, stride) = fig.render_to_rgba8().expect("rgba render");

    // Top-left corner of the plot rect sits outside the triangle: only the frame paints it.
    let i = rect.top.floor() as usize * stride + rect.left.floor() as usize * 4;
    assert_eq!(&plain[i..i + 4], &[255, 255, 255, 255]);
    assert!(framed[i] < 200, "frame corner should be drawn: {:?}", &framed[i..i + 4]);
}
