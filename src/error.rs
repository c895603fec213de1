//! Error types for the Reversi engine

use thiserror::Error;

use crate::board::Square;

/// Main error type for the engine crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: square {square} is occupied or out of range")]
    InvalidMove { square: Square },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("invalid square '{input}' (expected a1..h8)")]
    ParseSquare { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
