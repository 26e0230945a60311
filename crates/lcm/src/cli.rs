// File: crates/lcm/src/cli.rs
// Summary: Command-line flags.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "laser-cooled-molecules",
    about = "Display number of laser-cooled molecules over the years.",
    version
)]
pub struct Cli {
    /// Save the chart to laser_cooled_molecules.svg instead of opening a window
    #[arg(long)]
    pub save: bool,
}
