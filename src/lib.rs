//! Sparse Game of Life simulator
//!
//! Reads a set of live cells in Life 1.06 format, advances it a fixed number
//! of generations on an unbounded plane, and writes the result back out.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Cell, GameOfLifeRules, Grid};

use tracing::info;

/// Result of running the simulation on an initial grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// The initial grid had no live cells, so nothing was stepped
    NoLiveCells,
    /// The grid after the requested number of generations
    Evolved { grid: Grid, generations: usize },
}

impl SimulationOutcome {
    /// The grid to hand to the writer
    pub fn into_grid(self) -> Grid {
        match self {
            SimulationOutcome::NoLiveCells => Grid::new(),
            SimulationOutcome::Evolved { grid, .. } => grid,
        }
    }
}

/// Main entry point: advance `initial` by `generations` steps
pub fn simulate(initial: Grid, generations: usize) -> SimulationOutcome {
    if initial.is_empty() {
        return SimulationOutcome::NoLiveCells;
    }

    info!(generations, population = initial.living_count(), "starting simulation");
    let grid = GameOfLifeRules::evolve_generations(initial, generations);
    info!(population = grid.living_count(), "simulation finished");

    SimulationOutcome::Evolved { grid, generations }
}
