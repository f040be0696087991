//! Errors reported by the game engine.

use thiserror::Error;

use crate::games::tictactoe::SessionPhase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The target cell is outside the board or already holds a mark.
    #[error("Invalid move at cell {index}: {reason}")]
    InvalidMove { index: usize, reason: &'static str },

    /// A human move was submitted while the session was not waiting for one.
    #[error("Illegal move attempt: session is {phase}")]
    IllegalMoveAttempt { phase: SessionPhase },

    /// The move selector was asked to play on a full board.
    #[error("No legal move: the board is full")]
    NoLegalMove,

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
