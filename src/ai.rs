// Computer move selection: a uniform pick among the empty cells.
// Reads the board by value, nothing is allocated.

use crate::{board::Board, config::BOARD_SIZE};
use rand::Rng;

/// Pick a uniformly random empty cell, or `None` if the board is full.
///
/// Samples `(row, col)` over the whole grid and retries until it lands on an
/// empty cell. The grid is tiny, so rejection sampling is uniform over the free
/// cells and terminates as soon as one free cell exists.
pub fn random_free_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if board.is_full() {
        return None;
    }
    let cells = board.cells();
    loop {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        if cells[x][y].is_empty() {
            return Some((x, y));
        }
    }
}
