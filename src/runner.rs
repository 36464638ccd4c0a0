#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

use log::{info, warn};
use rand::rngs::SmallRng;

use crate::{
    common::{GameError, GameOutcome, PlayerId},
    game::GameState,
    player::Player,
};

/// Drives a game by alternating the user side and the computer side.
pub struct GameRunner {
    player: Box<dyn Player>,
    state: GameState,
}

impl GameRunner {
    pub fn new(player: Box<dyn Player>, state: GameState) -> Self {
        Self { player, state }
    }

    /// Play until the game reaches a terminal outcome or the user quits.
    ///
    /// Refused user moves are reported back to the player, who is asked again.
    /// If the user abandons the game the non-terminal outcome is returned.
    pub fn run(&mut self, rng: &mut SmallRng, user_first: bool) -> Result<GameOutcome, GameError> {
        let mut turn = if user_first {
            PlayerId::User
        } else {
            PlayerId::Computer
        };
        info!("starting game, {} moves first", turn.name());

        loop {
            let outcome = self.state.check_game();
            if outcome.is_terminal() {
                info!("game over after {} moves: {}", self.move_count(), outcome);
                self.player.handle_game_over(&self.state.board(), outcome);
                return Ok(outcome);
            }

            match turn {
                PlayerId::User => {
                    let board = self.state.board();
                    let Some((x, y)) = self.player.select_move(rng, &board) else {
                        info!("user left the game after {} moves", self.move_count());
                        return Ok(outcome);
                    };
                    match self.state.accept_user_move(x, y) {
                        Ok(()) => {}
                        Err(e @ (GameError::InvalidMove | GameError::OutOfBounds { .. })) => {
                            warn!("rejected user move ({}, {}): {}", x, y, e);
                            self.player.handle_rejected_move((x, y), &e);
                            continue;
                        }
                        Err(e) => return Err(e),
                    }
                }
                PlayerId::Computer => {
                    let coord = self.state.create_computer_move(rng)?;
                    self.player.handle_computer_move(coord);
                }
            }
            turn = turn.opponent();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Current evaluation of the board.
    pub fn outcome(&self) -> GameOutcome {
        self.state.check_game()
    }

    pub fn move_count(&self) -> usize {
        self.state.move_history().len()
    }
}
