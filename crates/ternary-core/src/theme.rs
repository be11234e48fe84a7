// File: crates/ternary-core/src/theme.rs
// Summary: Colour presets for ternary figures (light default, dark, solarized).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Axes frame, drawn only while the axis is on.
    pub frame: skia::Color,
    pub tick: skia::Color,
    /// Outer triangle.
    pub boundary: skia::Color,
    /// Internal gridlines.
    pub grid: skia::Color,
    pub label: skia::Color,
    /// Default colour for user lines.
    pub line: skia::Color,
    /// Default colour for user markers.
    pub marker: skia::Color,
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            boundary: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 128, 128, 128),
            label: skia::Color::from_argb(255, 0, 0, 0),
            line: skia::Color::from_argb(255, 31, 119, 180),
            marker: skia::Color::from_argb(255, 255, 127, 14),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            boundary: skia::Color::from_argb(255, 235, 235, 245),
            grid: skia::Color::from_argb(255, 70, 70, 78),
            label: skia::Color::from_argb(255, 235, 235, 245),
            line: skia::Color::from_argb(255, 64, 160, 255),
            marker: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            frame: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),      // base00
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            boundary: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),   // base03
            grid: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),       // base1
            label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            line: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),       // blue
            marker: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),     // orange
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            frame: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),      // base1
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            boundary: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),   // base2
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
            line: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),
            marker: skia::Color::from_argb(255, 0xb5, 0x89, 0x00),     // yellow
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::solarized_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
