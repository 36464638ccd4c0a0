use crate::{
    board::Board,
    common::{GameError, GameOutcome},
};
use rand::rngs::SmallRng;

/// Interface implemented by whoever drives the user side of a game.
pub trait Player {
    /// Choose the next cell to mark, or `None` to abandon the game.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)>;

    /// Inform the player that its last choice was refused.
    fn handle_rejected_move(&mut self, _coord: (usize, usize), _err: &GameError) {}

    /// Inform the player of the cell the computer just marked.
    fn handle_computer_move(&mut self, _coord: (usize, usize)) {}

    /// Called once with the final board when the game reaches a terminal outcome.
    fn handle_game_over(&mut self, _board: &Board, _outcome: GameOutcome) {}
}
