use crate::{ai, board::Board};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Automated user that marks a uniformly random free cell each turn.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)> {
        ai::random_free_cell(board, rng)
    }
}
