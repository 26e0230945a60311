// File: crates/chart-core/src/theme.rs
// Summary: Paper-style theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
    pub area_fill: skia::Color,
    pub annotation: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White background, black spines, dotted gray grid.
    pub fn paper() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 128, 128, 128),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0, 0, 0),
            area_fill: skia::Color::from_argb(255, 0x42, 0x85, 0xF4),
            annotation: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::paper() }
}
