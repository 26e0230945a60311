// File: crates/chart-core/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::Chart;
use crate::geometry::{clamp, RectI32};
use crate::scale::LinearScale;
use crate::series::SeriesType;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Current axis limits of `chart`.
    pub fn from_axes(chart: &Chart) -> Self {
        Self { x_min: chart.x_axis.min, x_max: chart.x_axis.max, y_min: chart.y_axis.min, y_max: chart.y_axis.max }
    }

    /// Data extents over every series (band lower bounds included).
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for (i, &(x, y)) in s.data_xy.iter().enumerate() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
                if s.series_type == SeriesType::StepArea {
                    let lo = s.lower_at(i);
                    y_min = y_min.min(lo);
                    y_max = y_max.max(lo);
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    /// Scales mapping this view onto the plot area of a `width` x `height` surface.
    fn scales(&self, width: i32, height: i32, insets: &Insets) -> (RectI32, LinearScale, LinearScale) {
        let plot = RectI32::plot_area(width, height, insets);
        let x = LinearScale::new(self.x_min, self.x_max, plot.left as f32, plot.right as f32);
        let y = LinearScale::new(self.y_min, self.y_max, plot.bottom as f32, plot.top as f32);
        (plot, x, y)
    }

    fn shift(&mut self, dx: f64, dy: f64) {
        self.x_min += dx;
        self.x_max += dx;
        self.y_min += dy;
        self.y_max += dy;
    }

    /// Move the view so the content follows a drag of `(dx, dy)` pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let (plot, x, y) = self.scales(width, height, insets);
        let moved_x = x.from_px(plot.left as f32 + dx as f32) - self.x_min;
        let moved_y = y.from_px(plot.bottom as f32 + dy as f32) - self.y_min;
        self.shift(-moved_x, -moved_y);
    }

    /// Zoom by `scroll` (positive zooms in) keeping the data point under the cursor fixed.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let (plot, x, y) = self.scales(width, height, insets);
        let cx = clamp(cursor_x, plot.left as f64, plot.right as f64);
        let cy = clamp(cursor_y, plot.top as f64, plot.bottom as f64);
        let (ax, ay) = (x.from_px(cx as f32), y.from_px(cy as f32));
        let factor = clamp(1.0 - scroll, 0.1, 10.0);
        self.x_min = ax - (ax - self.x_min) * factor;
        self.x_max = ax + (self.x_max - ax) * factor;
        self.y_min = ay - (ay - self.y_min) * factor;
        self.y_max = ay + (self.y_max - ay) * factor;
    }
}
