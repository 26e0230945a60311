// File: crates/lcm/src/lib.rs
// Summary: Application wiring shared by the binary and its tests.

pub mod cli;
pub mod config;
pub mod logging;
pub mod viewer;

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::Chart;
use log::info;
use molecule_timeline::{build_chart, Catalog};

use crate::cli::Cli;
use crate::config::AppConfig;

/// Build the timeline chart for `catalog`.
pub fn timeline(catalog: &Catalog, config: &AppConfig) -> Result<Chart> {
    build_chart(catalog, &config.style).context("building timeline chart")
}

/// Write `chart` as SVG to `path`. A failed write fails the whole export.
pub fn export_svg(chart: &Chart, config: &AppConfig, path: &Path) -> Result<()> {
    chart
        .render_to_svg(&config.render, path)
        .with_context(|| format!("exporting chart to {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Run one invocation: export with `--save`, otherwise open a window.
pub fn run(cli: &Cli, config: AppConfig) -> Result<()> {
    let catalog = Catalog::builtin();
    let chart = timeline(&catalog, &config)?;
    if cli.save {
        export_svg(&chart, &config, &config.output)
    } else {
        viewer::show(chart, config.render, &config.window_title)
    }
}
