// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use skia_safe as skia;

/// Default surface width in pixels (16:9 figure).
pub const WIDTH: i32 = 1280;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 720;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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
}

impl Default for Insets {
    fn default() -> Self {
        // Wide right margin leaves room for annotations past the last year.
        Self::new(84, 140, 28, 64)
    }
}

/// Parse a `#RRGGBB` hex string into an opaque color.
pub fn color_from_hex(hex: &str) -> Option<skia::Color> {
    let h = hex.strip_prefix('#').unwrap_or(hex);
    if h.len() != 6 || !h.is_ascii() { return None; }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(skia::Color::from_rgb(r, g, b))
}
