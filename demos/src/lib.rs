//! Scenario driver shared by the `gridwalk` binary and its tests.
//!
//! A scenario is a [`GridLayout`] read from a TOML file (or the built-in
//! default), optionally overridden from the command line, then validated into
//! a [`Grid`] and reported on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gridwalk_core::Cell;
use gridwalk_paths::{Grid, GridLayout, neighbors, reachable, shortest_path};

/// Built-in scenario used when no file is given.
pub const DEFAULT_SCENARIO: &str = include_str!("../scenarios/default.toml");

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Breadth-first search over a blocked grid")]
pub struct Cli {
    /// Scenario file (TOML with width, height, start, goal, blocked)
    #[arg(long)]
    pub scenario: Option<PathBuf>,
    /// Override the grid width
    #[arg(long)]
    pub width: Option<i32>,
    /// Override the grid height
    #[arg(long)]
    pub height: Option<i32>,
    /// Override the start cell, as x,y
    #[arg(long)]
    pub start: Option<Cell>,
    /// Override the goal cell, as x,y
    #[arg(long)]
    pub goal: Option<Cell>,
    /// Blocked cell, as x,y (repeatable). Replaces the scenario's blocked set.
    #[arg(long = "wall")]
    pub walls: Vec<Cell>,
    /// Skip the grid rendering
    #[arg(long)]
    pub no_render: bool,
}

impl Cli {
    /// Resolve the scenario file (or the default) and apply overrides.
    pub fn layout(&self) -> Result<GridLayout> {
        let mut layout = match &self.scenario {
            Some(path) => load_scenario(path)?,
            None => parse_scenario(DEFAULT_SCENARIO).context("parsing built-in scenario")?,
        };
        if let Some(w) = self.width {
            layout.width = w;
        }
        if let Some(h) = self.height {
            layout.height = h;
        }
        if let Some(s) = self.start {
            layout.start = s;
        }
        if let Some(g) = self.goal {
            layout.goal = g;
        }
        if !self.walls.is_empty() {
            layout.blocked = self.walls.clone();
        }
        Ok(layout)
    }
}

/// Parse a TOML scenario. Geometry is not validated here.
pub fn parse_scenario(text: &str) -> Result<GridLayout> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a TOML scenario file.
pub fn load_scenario(path: &Path) -> Result<GridLayout> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    parse_scenario(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

/// Text report for a grid: optional rendering, start neighbors, reachability
/// and the shortest path.
pub fn report(grid: &Grid, render: bool) -> String {
    let start = grid.start();
    let goal = grid.goal();

    let mut lines = Vec::new();
    if render {
        lines.push(grid.render());
        lines.push(String::new());
    }
    lines.push(format!(
        "neighbors of {start}: {}",
        join(&neighbors(grid, start), ", ")
    ));
    lines.push(format!("reachable: {}", reachable(grid, start, goal)));
    lines.push(match shortest_path(grid, start, goal) {
        Some(path) => format!("path ({} steps): {}", path.len() - 1, join(&path, " -> ")),
        None => "path: none".to_string(),
    });

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn join(cells: &[Cell], sep: &str) -> String {
    let parts: Vec<String> = cells.iter().map(Cell::to_string).collect();
    format!("[{}]", parts.join(sep))
}
