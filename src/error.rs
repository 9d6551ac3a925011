//! Error types

use thiserror::Error;

/// A move that `apply_move` refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position {index} is outside the board (expected 0-8)")]
    OutOfRange { index: usize },

    #[error("position {index} is already occupied")]
    Occupied { index: usize },
}

impl InvalidMove {
    /// Index the move targeted
    pub fn index(&self) -> usize {
        match *self {
            InvalidMove::OutOfRange { index } | InvalidMove::Occupied { index } => index,
        }
    }
}

/// Crate-level error for game sessions and shells
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("game already over")]
    GameOver,

    #[error("not this player's turn")]
    NotYourTurn,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
