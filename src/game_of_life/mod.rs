//! Game of Life core functionality

pub mod grid;
pub mod neighbors;
pub mod rules;
pub mod io;

pub use grid::{BoundingBox, Cell, Grid};
pub use neighbors::{neighbors, NeighborPartition, MOORE_OFFSETS};
pub use rules::GameOfLifeRules;
pub use io::{load_grid_from_file, load_grid_from_stdin, save_grid_to_file, write_grid, Whitespace};
