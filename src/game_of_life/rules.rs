//! Game of Life rules on a sparse grid

use super::neighbors::neighbors;
use super::{Cell, Grid};
use ahash::AHashMap;
use tracing::debug;

/// Live-neighbor counts that keep a live cell alive
pub const SURVIVAL_COUNTS: [usize; 2] = [2, 3];

/// Live-neighbor counts that bring a dead cell to life
pub const BIRTH_COUNTS: [usize; 1] = [3];

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation.
    ///
    /// Every decision reads `current` only. Survivors start as a copy of the
    /// live set and lose the cells that die; births are found by counting how
    /// many live cells touch each dead neighbor.
    pub fn step(current: &Grid) -> Grid {
        let mut next = current.as_set().clone();
        let mut birth_candidates: AHashMap<Cell, usize> = AHashMap::new();

        for cell in current.iter() {
            let partition = neighbors(current, cell);

            if !Self::should_be_alive(true, partition.alive_count()) {
                next.remove(&cell);
            }

            for dead in partition.dead {
                *birth_candidates.entry(dead).or_default() += 1;
            }
        }

        next.extend(
            birth_candidates
                .into_iter()
                .filter(|&(_, live)| Self::should_be_alive(false, live))
                .map(|(cell, _)| cell),
        );

        Grid::from_set(next)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for generation in 1..=generations {
            grid = Self::step(&grid);
            debug!(generation, population = grid.living_count(), "stepped");
        }
        grid
    }

    /// Whether a cell is alive next generation given its state and live-neighbor count
    pub fn should_be_alive(alive: bool, live_neighbors: usize) -> bool {
        if alive {
            SURVIVAL_COUNTS.contains(&live_neighbors)
        } else {
            BIRTH_COUNTS.contains(&live_neighbors)
        }
    }
}
