// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod annotation;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;

pub use chart::{Chart, LegendEntry, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::{Axis, TickMode};
pub use annotation::{Annotation, HAlign, VAlign};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use types::color_from_hex;
pub use skia_safe::Color;
