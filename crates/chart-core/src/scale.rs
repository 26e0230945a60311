// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps a data interval `[d0, d1]` onto a pixel interval `[p0, p1]`.
/// `p1 < p0` is allowed and flips the direction (screen Y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.p1 - self.p0) as f64;
        if span.abs() < 1e-9 { return self.d0; }
        self.d0 + ((px - self.p0) as f64 / span) * (self.d1 - self.d0)
    }
}

/// Pair of scales for a plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotScales {
    pub fn new(plot: &RectI32, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            x: LinearScale::new(x_axis.min, x_axis.max, plot.left as f32, plot.right as f32),
            y: LinearScale::new(y_axis.min, y_axis.max, plot.bottom as f32, plot.top as f32),
        }
    }
    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_inverts() {
        let s = LinearScale::new(2009.0, 2025.0, 100.0, 900.0);
        assert_eq!(s.to_px(2009.0), 100.0);
        assert_eq!(s.to_px(2025.0), 900.0);
        assert!((s.from_px(500.0) - 2017.0).abs() < 1e-6);
    }

    #[test]
    fn y_scale_grows_upward() {
        let plot = RectI32::from_ltrb(0, 0, 100, 100);
        let s = PlotScales::new(&plot, &Axis::new("x", 0.0, 1.0), &Axis::new("y", 0.0, 10.0));
        assert!(s.y.to_px(10.0) < s.y.to_px(0.0));
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 10.0);
        assert_eq!(s.d1, 4.0);
    }
}
