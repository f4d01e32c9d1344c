//! Breadth-first search scenario driver.
//!
//! Run: cargo run --bin gridwalk -- --scenario demos/scenarios/split.toml
//!      cargo run --bin gridwalk -- --width 3 --height 3 --start 0,0 --goal 2,2

use anyhow::{Context, Result};
use clap::Parser;
use gridwalk_demos::{Cli, report};
use gridwalk_paths::Grid;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gridwalk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let layout = cli.layout()?;
    info!(
        width = layout.width,
        height = layout.height,
        blocked = layout.blocked.len(),
        "loaded scenario"
    );

    let grid = Grid::try_from(layout).context("invalid grid geometry")?;
    print!("{}", report(&grid, !cli.no_render));
    Ok(())
}
