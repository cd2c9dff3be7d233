use super::direction::Direction;
use crate::consts;
use std::fmt;
use thiserror::Error;

/// A position on the grid.  `x` runs left to right and `z` runs from the far
/// edge of the grid to the near edge, so that the grid's center is the
/// origin.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) z: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, z: i32) -> Cell {
        Cell { x, z }
    }

    /// Return the cell one step away from `self` in direction `dir`.  The
    /// result may lie outside of any given grid.
    pub(crate) fn step(self, dir: Direction) -> Cell {
        let (dx, dz) = dir.delta();
        Cell {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Cell {
        Cell { x, z }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// A square grid of cells centered on the origin
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Largest coordinate value on either axis.  Valid coordinates are in
    /// `-bound..=bound`.
    bound: i32,
}

impl Grid {
    /// Create a grid `size` cells wide and deep.  `size` must be odd so that
    /// the grid has a center cell, and it must lie within
    /// [`MIN_GRID_SIZE`][consts::MIN_GRID_SIZE] and
    /// [`MAX_GRID_SIZE`][consts::MAX_GRID_SIZE].
    pub(crate) fn new(size: u16) -> Result<Grid, GridSizeError> {
        if size % 2 == 0 || !(consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&size) {
            return Err(GridSizeError(size));
        }
        Ok(Grid {
            bound: i32::from((size - 1) / 2),
        })
    }

    pub(crate) fn bound(self) -> i32 {
        self.bound
    }

    /// Number of cells along each side
    pub(crate) fn size(self) -> u16 {
        // `bound` is derived from a `u16` no larger than MAX_GRID_SIZE.
        u16::try_from(self.bound * 2 + 1).unwrap_or(u16::MAX)
    }

    pub(crate) fn cell_count(self) -> usize {
        let side = usize::from(self.size());
        side * side
    }

    /// Test whether `cell` lies on the grid
    pub(crate) fn contains(self, cell: Cell) -> bool {
        let range = -self.bound..=self.bound;
        range.contains(&cell.x) && range.contains(&cell.z)
    }

    /// Iterate over every cell of the grid, one row (constant `z`) at a time
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        let b = self.bound;
        (-b..=b).flat_map(move |z| (-b..=b).map(move |x| Cell { x, z }))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            bound: i32::from((consts::GRID_SIZE - 1) / 2),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "invalid grid size {0}: must be an odd number from {min} to {max}",
    min = consts::MIN_GRID_SIZE,
    max = consts::MAX_GRID_SIZE
)]
pub(crate) struct GridSizeError(pub(crate) u16);
