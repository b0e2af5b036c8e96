//! Moore neighborhood lookup against a sparse grid

use super::{Cell, Grid};
use ahash::AHashSet;

/// Offsets of the 8 Moore neighbors, row by row starting above-left
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The neighbors of one cell split by their current state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborPartition {
    pub alive: AHashSet<Cell>,
    pub dead: AHashSet<Cell>,
}

impl NeighborPartition {
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }
}

impl Cell {
    /// The 8 cells adjacent to this one.
    ///
    /// Coordinates at the very edge of the `i64` range overflow here; that
    /// region is not supported.
    pub fn moore_neighborhood(self) -> impl Iterator<Item = Cell> {
        MOORE_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }
}

/// Partition the neighbors of `cell` into those alive and dead in `grid`
pub fn neighbors(grid: &Grid, cell: Cell) -> NeighborPartition {
    let mut partition = NeighborPartition::default();
    for neighbor in cell.moore_neighborhood() {
        if grid.is_alive(neighbor) {
            partition.alive.insert(neighbor);
        } else {
            partition.dead.insert(neighbor);
        }
    }
    partition
}
