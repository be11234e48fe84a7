// File: crates/ternary-core/src/types.rs
// Summary: Shared types and constants (figure size, paddings).

/// Default figure width in pixels.
pub const WIDTH: i32 = 640;
/// Default figure height in pixels.
pub const HEIGHT: i32 = 480;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
    /// Side-wise sum of two insets.
    pub const fn grow(&self, other: &Insets) -> Self {
        Self::new(
            self.left + other.left,
            self.right + other.right,
            self.top + other.top,
            self.bottom + other.bottom,
        )
    }
    pub const fn is_zero(&self) -> bool {
        self.hsum() == 0 && self.vsum() == 0
    }
}
