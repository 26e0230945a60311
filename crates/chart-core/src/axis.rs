// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick policy.

use crate::grid::{integer_ticks, linspace, minor_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickMode {
    /// Evenly spaced ticks, `count` including both ends.
    Linear { count: usize },
    /// Integer ticks on a 1/2/5 ladder, at most `max` of them.
    Integer { max: usize, prune: bool },
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickMode,
    /// Spacing of unlabelled minor ticks, if any.
    pub minor_step: Option<f64>,
    /// Draw grid lines perpendicular to this axis at its ticks.
    pub grid: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: TickMode::Linear { count: 6 },
            minor_step: None,
            grid: false,
        }
    }

    pub fn with_integer_ticks(mut self, max: usize, prune: bool) -> Self {
        self.ticks = TickMode::Integer { max, prune };
        self
    }

    pub fn with_minor_step(mut self, step: f64) -> Self {
        self.minor_step = Some(step);
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn major_ticks(&self) -> Vec<f64> {
        match self.ticks {
            TickMode::Linear { count } => linspace(self.min, self.max, count),
            TickMode::Integer { max, prune } => integer_ticks(self.min, self.max, max, prune),
        }
    }

    pub fn minor_ticks(&self) -> Vec<f64> {
        match self.minor_step {
            Some(step) => minor_ticks(self.min, self.max, step, &self.major_ticks()),
            None => Vec::new(),
        }
    }

    /// Tick label text; integer ticks print without decimals.
    pub fn format_tick(&self, v: f64) -> String {
        match self.ticks {
            TickMode::Integer { .. } => format!("{}", v.round() as i64),
            TickMode::Linear { .. } => {
                if (v - v.round()).abs() < 1e-9 { format!("{}", v.round() as i64) } else { format!("{v:.2}") }
            }
        }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_axis_formats_without_decimals() {
        let a = Axis::new("Year", 2009.0, 2025.0).with_integer_ticks(8, true);
        assert_eq!(a.format_tick(2010.0), "2010");
        assert!(a.major_ticks().iter().all(|t| t.fract() == 0.0));
    }

    #[test]
    fn minor_ticks_fill_between_majors() {
        let a = Axis::new("n", 0.0, 12.2).with_integer_ticks(7, false).with_minor_step(1.0);
        let majors = a.major_ticks();
        let minors = a.minor_ticks();
        assert_eq!(majors, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        assert_eq!(minors, vec![1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
    }

    #[test]
    fn zoomed_out_axis_keeps_majors_and_drops_minors() {
        let a = Axis::new("n", -5.0e6, 5.0e6).with_integer_ticks(8, false).with_minor_step(1.0);
        assert!(a.minor_ticks().is_empty());
        assert!(!a.major_ticks().is_empty() && a.major_ticks().len() <= 9);
    }
}
