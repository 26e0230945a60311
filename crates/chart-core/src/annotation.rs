// File: crates/chart-core/src/annotation.rs
// Summary: Text annotations anchored at data coordinates.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// A label drawn at `(x, y)` in data space. Annotations are not clipped to
/// the plot area, so they may sit in the margins.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub color: Option<skia::Color>,
    pub size: f32,
}

impl Annotation {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), h_align: HAlign::Left, v_align: VAlign::Center, color: None, size: 13.0 }
    }

    pub fn aligned(mut self, h_align: HAlign, v_align: VAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(1.0);
        self
    }
}
