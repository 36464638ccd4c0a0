//! Fixed 3×3 board value.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::common::{Cell, GameError};
use crate::config::{BOARD_SIZE, LINES};
use core::fmt;

/// The grid of cells. `Board` is `Copy`, so every read of a game's board is an
/// independent snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from an existing grid.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Raw grid, indexed `[row][col]`.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }

    fn check_bounds(x: usize, y: usize) -> Result<(), GameError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(())
    }

    /// Cell at row `x`, column `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        Self::check_bounds(x, y)?;
        Ok(self.cells[x][y])
    }

    /// Returns `true` if the in-bounds cell at (`x`, `y`) holds no mark.
    pub fn is_free(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.get(x, y)?.is_empty())
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GameError> {
        Self::check_bounds(x, y)?;
        self.cells[x][y] = cell;
        Ok(())
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        let mut free = Vec::with_capacity(self.free_count());
        for (x, row) in self.cells.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    free.push((x, y));
                }
            }
        }
        free
    }

    pub fn free_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|c| c.is_empty()).count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.free_count() == 0
    }

    /// Returns `true` if any row, column or diagonal is filled with `mark`.
    /// An empty `mark` never forms a line.
    pub fn has_line(&self, mark: Cell) -> bool {
        if mark.is_empty() {
            return false;
        }
        LINES
            .iter()
            .any(|line| line.iter().all(|&(x, y)| self.cells[x][y] == mark))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2}", r + 1)?;
            for cell in row.iter() {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
