// File: crates/chart-core/src/series.rs
// Summary: Series model for lines, post-steps and stacked step areas.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Step,       // post-step: y[i] holds from x[i] until x[i+1]
    StepArea,   // band between `lower` and `data_xy`, both post-stepped
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub lower: Option<Vec<f64>>,      // used by StepArea; same length as data_xy
    pub color: Option<skia::Color>,   // None = theme default
    pub stroke_width: f32,
    pub label: Option<String>,        // labelled series get a legend entry
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, data_xy: Vec::new(), lower: None, color: None, stroke_width: 2.0, label: None }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    /// Band between `lower[i]` and `upper[i].1`.
    /// Contract: `lower.len() == upper.len()` and `lower[i] <= upper[i].1`.
    pub fn try_step_area(upper: Vec<(f64, f64)>, lower: Vec<f64>) -> Result<Self, &'static str> {
        if upper.len() != lower.len() { return Err("lower bound length differs from upper"); }
        if upper.iter().zip(&lower).any(|(&(_, hi), &lo)| lo > hi) { return Err("lower bound above upper"); }
        Ok(Self { lower: Some(lower), ..Self::with_data(SeriesType::StepArea, upper) })
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Lower bound of point `i`; zero for series without an explicit band.
    pub fn lower_at(&self, i: usize) -> f64 {
        self.lower.as_ref().and_then(|l| l.get(i).copied()).unwrap_or(0.0)
    }

    /// Polyline vertices in data space, with post-steps expanded.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        match self.series_type {
            SeriesType::Line => self.data_xy.clone(),
            SeriesType::Step | SeriesType::StepArea => post_step_vertices(&self.data_xy),
        }
    }

    /// Closed polygon of a StepArea band: upper outline forward, lower outline back.
    pub fn band_polygon(&self) -> Vec<(f64, f64)> {
        let mut poly = post_step_vertices(&self.data_xy);
        let lower: Vec<(f64, f64)> = self.data_xy.iter().enumerate().map(|(i, &(x, _))| (x, self.lower_at(i))).collect();
        poly.extend(post_step_vertices(&lower).into_iter().rev());
        poly
    }
}

/// Expand `(x, y)` points into the vertices of a post-step polyline.
pub fn post_step_vertices(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push((x, points[i - 1].1));
        }
        out.push((x, y));
    }
    out
}
