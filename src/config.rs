pub const BOARD_SIZE: usize = 3;
/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

pub const USER_NAME: &str = "user";
pub const COMPUTER_NAME: &str = "computer";

pub const USER_MARK: char = 'X';
pub const COMPUTER_MARK: char = 'O';

/// Every winning line as three `(row, col)` coordinates: rows, columns, then
/// both diagonals.
pub const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
