// File: crates/lcm/src/main.rs
// Summary: Entry point; parses flags, starts logging and renders the timeline.

use anyhow::Result;
use clap::Parser;

use lcm::cli::Cli;
use lcm::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = lcm::logging::init()?;
    lcm::run(&cli, AppConfig::default())
}
