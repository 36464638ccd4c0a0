#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::{
    ai,
    board::Board,
    common::{GameError, GameOutcome, MoveRecord, PlayerId},
    config::BOARD_SIZE,
};
use log::debug;
use rand::Rng;

/// Rules engine for one game: owns the board and the move history.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Create a game with an empty board and no moves recorded.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Create a game starting from an existing board. History starts empty.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Snapshot of the current board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Reset the board to empty and forget all moves.
    pub fn clear(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    /// Place the user's mark at row `x`, column `y`.
    pub fn accept_user_move(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if !self.board.is_free(x, y)? {
            return Err(GameError::InvalidMove);
        }
        self.apply(PlayerId::User, x, y)
    }

    /// Place the computer's mark on a uniformly random empty cell and return
    /// its coordinates.
    pub fn create_computer_move<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(usize, usize), GameError> {
        let (x, y) = ai::random_free_cell(&self.board, rng).ok_or(GameError::NoMovesAvailable)?;
        self.apply(PlayerId::Computer, x, y)?;
        Ok((x, y))
    }

    fn apply(&mut self, actor: PlayerId, x: usize, y: usize) -> Result<(), GameError> {
        self.board.set(x, y, actor.mark())?;
        self.history.push(MoveRecord { actor, x, y });
        debug!("{} played ({}, {})", actor.name(), x, y);
        Ok(())
    }

    /// Moves accepted since construction or the last [`clear`](Self::clear).
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Coordinates of the cells that are currently unoccupied.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.board.free_cells()
    }

    /// Returns `true` if `player` has filled a row, column or diagonal.
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.board.has_line(player.mark())
    }

    /// Evaluate the board. A user line takes priority over a computer line,
    /// and both take priority over a full board.
    pub fn check_game(&self) -> GameOutcome {
        if self.is_winner(PlayerId::User) {
            GameOutcome::UserWon
        } else if self.is_winner(PlayerId::Computer) {
            GameOutcome::ComputerWon
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Continue
        }
    }
}
