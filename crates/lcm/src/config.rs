// File: crates/lcm/src/config.rs
// Summary: Application defaults (output file, window, figure size, chart style).

use std::path::PathBuf;

use chart_core::RenderOptions;
use molecule_timeline::TimelineStyle;

/// File written by `--save`, relative to the working directory.
pub const OUTPUT_FILE: &str = "laser_cooled_molecules.svg";

/// Figure width in pixels; height follows a 16:9 aspect.
pub const FIGURE_WIDTH: i32 = 1280;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub output: PathBuf,
    pub window_title: String,
    pub render: RenderOptions,
    pub style: TimelineStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(OUTPUT_FILE),
            window_title: "Laser-cooled molecules".to_string(),
            render: RenderOptions { width: FIGURE_WIDTH, height: figure_height(FIGURE_WIDTH), ..RenderOptions::default() },
            style: TimelineStyle::default(),
        }
    }
}

/// Height for a 16:9 figure of `width` pixels.
pub fn figure_height(width: i32) -> i32 {
    (width as f64 * 9.0 / 16.0).round() as i32
}
