//! Sparse grid representation for Game of Life

use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the unbounded plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// The set of live cells of one generation.
///
/// Any coordinate not in the set is dead. A grid is never mutated once built;
/// stepping produces a new grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Grid {
    cells: AHashSet<Cell>,
}

/// Inclusive extent of the live population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Cell,
    pub max: Cell,
}

impl Grid {
    /// Create a grid with no live cells
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from any collection of live cells, dropping duplicates
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Wrap an already-built live set
    pub(crate) fn from_set(cells: AHashSet<Cell>) -> Self {
        Self { cells }
    }

    /// Borrow the live set
    pub(crate) fn as_set(&self) -> &AHashSet<Cell> {
        &self.cells
    }

    #[inline]
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterate over live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells sorted by `(x, y)`
    pub fn living_cells(&self) -> Vec<Cell> {
        self.cells.iter().copied().sorted().collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest box containing every live cell, `None` for an empty grid
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (min_x, max_x) = self.cells.iter().map(|c| c.x).minmax().into_option()?;
        let (min_y, max_y) = self.cells.iter().map(|c| c.y).minmax().into_option()?;
        Some(BoundingBox {
            min: Cell::new(min_x, min_y),
            max: Cell::new(max_x, max_y),
        })
    }
}

impl<C: Into<Cell>> FromIterator<C> for Grid {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl From<Vec<Cell>> for Grid {
    fn from(cells: Vec<Cell>) -> Self {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Vec<Cell> {
    fn from(grid: Grid) -> Self {
        grid.living_cells()
    }
}

/// Build a grid from coordinate literals in tests
#[cfg(test)]
pub(crate) fn grid_of(coords: &[(i64, i64)]) -> Grid {
    Grid::from_cells(coords.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.living_count(), 0);
        assert_eq!(grid.bounding_box(), None);
    }

    #[test]
    fn test_duplicates_collapse() {
        let grid = grid_of(&[(1, 2), (1, 2), (3, 4)]);
        assert_eq!(grid.living_count(), 2);
        assert!(grid.is_alive(Cell::new(1, 2)));
        assert!(grid.is_alive(Cell::new(3, 4)));
        assert!(!grid.is_alive(Cell::new(2, 1)));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = grid_of(&[(0, 0), (5, -3), (i64::MAX, i64::MIN)]);
        let b = grid_of(&[(i64::MAX, i64::MIN), (0, 0), (5, -3)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_living_cells_sorted() {
        let grid = grid_of(&[(2, 0), (-1, 7), (2, -5)]);
        assert_eq!(
            grid.living_cells(),
            vec![Cell::new(-1, 7), Cell::new(2, -5), Cell::new(2, 0)]
        );
    }

    #[test]
    fn test_bounding_box() {
        let grid = grid_of(&[(-2, 4), (3, -1), (0, 0)]);
        let bbox = grid.bounding_box().unwrap();
        assert_eq!(bbox.min, Cell::new(-2, -1));
        assert_eq!(bbox.max, Cell::new(3, 4));

        let single = grid_of(&[(7, 7)]);
        let bbox = single.bounding_box().unwrap();
        assert_eq!(bbox.min, bbox.max);
    }

    #[test]
    fn test_json_shape() {
        let grid = grid_of(&[(1, 0), (0, 1)]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[{"x":0,"y":1},{"x":1,"y":0}]"#);

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
