//! Common types for tic-tac-toe: cells, players, move records, outcomes and errors.

use crate::config::{COMPUTER_MARK, COMPUTER_NAME, USER_MARK, USER_NAME};

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    #[cfg_attr(feature = "std", serde(rename = ""))]
    Empty,
    #[cfg_attr(feature = "std", serde(rename = "X"))]
    UserMark,
    #[cfg_attr(feature = "std", serde(rename = "O"))]
    ComputerMark,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used when printing the board.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::UserMark => USER_MARK,
            Cell::ComputerMark => COMPUTER_MARK,
        }
    }
}

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerId {
    User,
    Computer,
}

impl PlayerId {
    /// Mark this player places on the board.
    pub fn mark(&self) -> Cell {
        match self {
            PlayerId::User => Cell::UserMark,
            PlayerId::Computer => Cell::ComputerMark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerId::User => USER_NAME,
            PlayerId::Computer => COMPUTER_NAME,
        }
    }

    /// The other side.
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::User => PlayerId::Computer,
            PlayerId::Computer => PlayerId::User,
        }
    }
}

/// A single accepted move: who played and where (`x` = row, `y` = column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub actor: PlayerId,
    pub x: usize,
    pub y: usize,
}

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameOutcome {
    UserWon,
    ComputerWon,
    Draw,
    Continue,
}

impl GameOutcome {
    /// `true` once the game has a winner or ended in a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Continue)
    }

    /// Winning side, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::UserWon => Some(PlayerId::User),
            GameOutcome::ComputerWon => Some(PlayerId::Computer),
            _ => None,
        }
    }
}

impl core::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameOutcome::UserWon => write!(f, "{} won!", USER_NAME),
            GameOutcome::ComputerWon => write!(f, "{} won!", COMPUTER_NAME),
            GameOutcome::Draw => write!(f, "nobody won :–("),
            GameOutcome::Continue => write!(f, "continue"),
        }
    }
}

/// Errors returned by game operations. State is never modified when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Target cell already holds a mark.
    InvalidMove,
    /// Computer move requested on a full board.
    NoMovesAvailable,
    /// Coordinates fall outside the board.
    OutOfBounds { x: usize, y: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidMove => write!(f, "cell is already taken"),
            GameError::NoMovesAvailable => write!(f, "no cells available"),
            GameError::OutOfBounds { x, y } => {
                write!(f, "cell ({}, {}) is out of bounds", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
