// File: crates/ternary-core/src/text.rs
// Summary: Text shaping and aligned painting via Skia textlayout, plus a font-free extent estimate for layout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::artist::{HAlign, VAlign};
use crate::geometry::PixelRect;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that the anchor `(x, y)` sits at the requested alignment point.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        h_align: HAlign,
        v_align: VAlign,
    ) {
        let mut p = self.layout(text, size, color);
        let rect = aligned_rect(x, y, p.longest_line(), p.height(), p.alphabetic_baseline(), h_align, v_align);
        // Paragraph paints from its top-left corner.
        p.paint(canvas, (rect.left, rect.top));
    }
}

/// Box of a `w` x `h` text block whose alignment point is `(x, y)`.
/// `baseline` is the distance from the block top to the first baseline.
pub fn aligned_rect(x: f32, y: f32, w: f32, h: f32, baseline: f32, h_align: HAlign, v_align: VAlign) -> PixelRect {
    let left = match h_align {
        HAlign::Left => x,
        HAlign::Center => x - w * 0.5,
        HAlign::Right => x - w,
    };
    let top = match v_align {
        VAlign::Top => y,
        VAlign::Center => y - h * 0.5,
        VAlign::Baseline => y - baseline,
        VAlign::Bottom => y - h,
    };
    PixelRect::from_ltwh(left, top, w, h)
}

/// Font-independent extent guess `(w, h, baseline)` for a single line of text.
/// Layout uses this so figure geometry does not depend on installed fonts.
pub fn estimate_extent(text: &str, size: f32) -> (f32, f32, f32) {
    let chars = text.chars().count() as f32;
    (chars * size * 0.6, size * 1.2, size * 0.95)
}
