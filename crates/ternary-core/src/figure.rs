// File: crates/ternary-core/src/figure.rs
// Summary: Figure (one Axes plus creation options) and headless rendering using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::artist::{Artist, Line2D, Markers, Text};
use crate::axes::Axes;
use crate::error::{Result, TernaryError};
use crate::geometry::PixelRect;
use crate::grid::linspace;
use crate::scale::DataTransform;
use crate::text::{aligned_rect, estimate_extent, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Base padding around the plot for [`Layout::Constrained`], in pixels.
pub const CONSTRAINED_PAD: u32 = 12;
/// Padding for [`Layout::Tight`], in pixels.
pub const TIGHT_PAD: u32 = 4;
/// Tick marks per frame side while the axis is on.
const TICKS: usize = 5;
const TICK_LEN: f32 = 4.0;

/// How the plot rectangle is placed inside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Pad the plot so text anchored outside the data range stays on the canvas.
    #[default]
    Constrained,
    /// Small fixed padding, text may be clipped.
    Tight,
    /// Caller-supplied insets.
    Fixed(Insets),
}

/// Figure creation options.
#[derive(Clone, Copy, Debug)]
pub struct FigureOptions {
    pub width: i32,
    pub height: i32,
    pub layout: Layout,
    pub theme: Theme,
    /// Paint text artists. Off gives pixel-stable output across font setups.
    pub draw_labels: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            layout: Layout::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl FigureOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

pub struct Figure {
    pub options: FigureOptions,
    pub axes: Axes,
}

impl Figure {
    pub fn new(options: FigureOptions) -> Self {
        Self { options, axes: Axes::new() }
    }

    pub fn axes(&self) -> &Axes { &self.axes }
    pub fn axes_mut(&mut self) -> &mut Axes { &mut self.axes }

    /// Data-to-pixel transform for the current artists and options.
    pub fn transform(&self) -> DataTransform {
        let canvas = PixelRect::from_ltwh(0.0, 0.0, self.options.width as f32, self.options.height as f32);
        let bounds = self.axes.data_bounds();
        let equal = self.axes.aspect_equal();

        match self.options.layout {
            Layout::Fixed(insets) => DataTransform::fit(bounds, canvas.inset(&insets), equal),
            Layout::Tight => DataTransform::fit(bounds, canvas.inset(&Insets::uniform(TIGHT_PAD)), equal),
            Layout::Constrained => {
                let mut insets = Insets::uniform(CONSTRAINED_PAD);
                let mut tf = DataTransform::fit(bounds, canvas.inset(&insets), equal);
                // Growing one side moves text on the others; a few passes settle it.
                for _ in 0..3 {
                    let overflow = text_overflow(&self.axes, &tf, &canvas, CONSTRAINED_PAD as f32);
                    if overflow.is_zero() {
                        break;
                    }
                    insets = insets.grow(&overflow);
                    tf = DataTransform::fit(bounds, canvas.inset(&insets), equal);
                }
                tf
            }
        }
    }

    /// Render into an RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface()?;
        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(TernaryError::ReadPixels);
        }
        Ok((px, w, h, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.render_surface()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(TernaryError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote figure");
        Ok(())
    }

    fn render_surface(&self) -> Result<skia::Surface> {
        let (w, h) = (self.options.width, self.options.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(TernaryError::Surface { width: w, height: h })?;

        let tf = self.transform();
        debug!(width = w, height = h, artists = self.axes.artists().len(), "rendering figure");

        let theme = &self.options.theme;
        let canvas = surface.canvas();
        canvas.clear(theme.background);

        if self.axes.axis_on() {
            draw_frame(canvas, &tf.plot_rect(), theme);
        }

        let shaper = self.options.draw_labels.then(TextShaper::new);
        for artist in self.axes.draw_order() {
            match artist {
                Artist::Line(l) => draw_line(canvas, &tf, l),
                Artist::Markers(m) => draw_markers(canvas, &tf, m),
                Artist::Text(t) => {
                    if let Some(shaper) = &shaper {
                        draw_text(canvas, &tf, shaper, t);
                    }
                }
            }
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

/// How far, per side, text boxes reach past the canvas minus `pad`.
fn text_overflow(axes: &Axes, tf: &DataTransform, canvas: &PixelRect, pad: f32) -> Insets {
    let mut over = [0f32; 4]; // left, right, top, bottom
    for t in axes.texts() {
        if !t.x.is_finite() || !t.y.is_finite() {
            continue;
        }
        let (ax, ay) = tf.to_px((t.x, t.y));
        let (w, h, baseline) = estimate_extent(&t.text, t.style.size);
        let r = aligned_rect(ax, ay, w, h, baseline, t.style.h_align, t.style.v_align);
        over[0] = over[0].max(canvas.left + pad - r.left);
        over[1] = over[1].max(r.right - (canvas.right - pad));
        over[2] = over[2].max(canvas.top + pad - r.top);
        over[3] = over[3].max(r.bottom - (canvas.bottom - pad));
    }
    let px = |v: f32| if v > 0.0 { v.ceil() as u32 } else { 0 };
    Insets::new(px(over[0]), px(over[1]), px(over[2]), px(over[3]))
}

fn draw_frame(canvas: &skia::Canvas, rect: &PixelRect, theme: &Theme) {
    let mut frame = skia::Paint::default();
    frame.set_color(theme.frame);
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    canvas.draw_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), &frame);

    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);

    // bottom and left ticks point outward
    for x in linspace(rect.left as f64, rect.right as f64, TICKS) {
        let x = x as f32;
        canvas.draw_line((x, rect.bottom), (x, rect.bottom + TICK_LEN), &tick);
    }
    for y in linspace(rect.top as f64, rect.bottom as f64, TICKS) {
        let y = y as f32;
        canvas.draw_line((rect.left - TICK_LEN, y), (rect.left, y), &tick);
    }
}

fn draw_line(canvas: &skia::Canvas, tf: &DataTransform, line: &Line2D) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut segments = 0usize;
    for (x, y) in line.points() {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = tf.to_px((x, y));
        if pen_down {
            path.line_to(p);
            segments += 1;
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    if segments == 0 {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line.style.width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(line.style.color);

    canvas.draw_path(&path, &stroke);
}

fn draw_markers(canvas: &skia::Canvas, tf: &DataTransform, markers: &Markers) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(markers.style.color);

    for &(x, y) in &markers.points {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        canvas.draw_circle(tf.to_px((x, y)), markers.style.radius, &fill);
    }
}

fn draw_text(canvas: &skia::Canvas, tf: &DataTransform, shaper: &TextShaper, text: &Text) {
    if text.text.is_empty() || !text.x.is_finite() || !text.y.is_finite() {
        return;
    }
    let (x, y) = tf.to_px((text.x, text.y));
    shaper.draw_aligned(canvas, &text.text, x, y, text.style.size, text.style.color, text.style.h_align, text.style.v_align);
}
