// File: crates/molecule-timeline/src/plot.rs
// Summary: Assemble the stacked, stepped timeline chart from a catalog.

use chart_core::{color_from_hex, Annotation, Axis, Chart, Color, HAlign, Series, SeriesType, VAlign};
use log::{debug, info};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::TimelineError;
use crate::span::YearSpan;
use crate::stack::CategoryCounts;

/// Presentation knobs for the timeline chart.
#[derive(Clone, Debug)]
pub struct TimelineStyle {
    pub x_label: String,
    pub y_label: String,
    /// `#RRGGBB` fill per category, indexed like [`Category::ALL`].
    pub category_colors: [&'static str; 3],
    pub total_color: &'static str,
    pub total_width: f32,
    /// Horizontal gap between a step and its molecule labels, in years.
    pub label_offset: f64,
    pub label_color: &'static str,
    /// Molecule label font size, in pixels.
    pub label_size: f32,
    /// Space above the final count, in molecules.
    pub headroom: f64,
    pub max_x_ticks: usize,
    pub max_y_ticks: usize,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            x_label: "Year".to_string(),
            y_label: "# of laser-cooled molecules".to_string(),
            category_colors: ["#F4B400", "#0F9D58", "#4285F4"],
            total_color: "#000000",
            total_width: 2.0,
            label_offset: 0.08,
            label_color: "#000000",
            label_size: 13.0,
            headroom: 0.2,
            max_x_ticks: 10,
            max_y_ticks: 8,
        }
    }
}

impl TimelineStyle {
    pub fn category_color(&self, category: Category) -> &'static str {
        self.category_colors[category.index()]
    }
}

fn parse_color(hex: &str) -> Result<Color, TimelineError> {
    color_from_hex(hex).ok_or_else(|| TimelineError::InvalidColor(hex.to_string()))
}

fn step_points(span: YearSpan, counts: &[usize]) -> Vec<(f64, f64)> {
    span.iter().zip(counts).map(|(y, &c)| (y as f64, c as f64)).collect()
}

/// Build the timeline: one stacked step area per category, the total as a
/// step line, and every molecule's name beside the step that introduced it.
pub fn build_chart(catalog: &Catalog, style: &TimelineStyle) -> Result<Chart, TimelineError> {
    let chronological = catalog.chronological();
    let span = YearSpan::padded(&chronological)?;
    let counts = CategoryCounts::from_catalog(catalog, span)?;
    let total = counts.total().last().copied().unwrap_or(0);
    info!(
        "building timeline for {} molecules over {}..={}",
        catalog.len(),
        span.first(),
        span.last()
    );

    let mut chart = Chart::new();
    chart.x_axis = Axis::new(style.x_label.clone(), span.first() as f64, span.last() as f64)
        .with_integer_ticks(style.max_x_ticks, true);
    chart.y_axis = Axis::new(style.y_label.clone(), 0.0, total as f64 + style.headroom)
        .with_integer_ticks(style.max_y_ticks, false)
        .with_minor_step(1.0)
        .with_grid(true);

    for category in Category::ALL {
        let upper = step_points(span, counts.stacked(category));
        let lower = counts.below(category).into_iter().map(|c| c as f64).collect();
        let series = Series::try_step_area(upper, lower)
            .map_err(|reason| TimelineError::InvalidBand { category: category.label(), reason })?
            .with_color(parse_color(style.category_color(category))?)
            .with_label(category.label());
        chart.add_series(series);
    }

    chart.add_series(
        Series::with_data(SeriesType::Step, step_points(span, counts.total()))
            .with_color(parse_color(style.total_color)?)
            .with_stroke_width(style.total_width),
    );

    let label_color = parse_color(style.label_color)?;
    // In chronological order, a record's index is the number of molecules
    // cooled before it, so its label sits in its own unit band under the step.
    for (pos, record) in chronological.iter().enumerate() {
        let x = record.occurrence.year() as f64 + style.label_offset;
        let y = pos as f64 + 0.5;
        debug!("label {} at ({x:.2}, {y:.1})", record.name);
        chart.add_annotation(
            Annotation::new(x, y, record.display_name())
                .aligned(HAlign::Left, VAlign::Center)
                .with_color(label_color)
                .with_size(style.label_size),
        );
    }

    Ok(chart)
}
