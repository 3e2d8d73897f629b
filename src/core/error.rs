//! Error types.
//!
//! `MoveError` describes a rejected transition: the game state is left
//! untouched and the caller is expected to ask for another move.
//! `PersistError` covers save/load failures. An identity mismatch on load
//! is not an error; `load` reports it by returning `Ok(false)`.

use thiserror::Error;

use super::board::Coord;
use super::config::GameKind;

/// Why a move was not applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended.
    #[error("game is over")]
    GameOver,

    /// The point is outside the board.
    #[error("{0} is off the board")]
    OutOfBounds(Coord),

    /// The point already holds a stone.
    #[error("{0} is occupied")]
    Occupied(Coord),

    /// Immediate recapture of a single stone.
    #[error("{0} is forbidden by ko")]
    KoViolation(Coord),

    /// A coordinate is required but a pass was given.
    #[error("passing is not allowed here")]
    PassNotAllowed,

    /// The placement breaks a game-specific rule.
    #[error("illegal move at {0}")]
    IllegalMove(Coord),
}

/// Failure while saving or loading a game.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encode(#[from] bincode::Error),

    /// The file holds a different game.
    #[error("save file holds {found}, expected {expected}")]
    KindMismatch { expected: GameKind, found: GameKind },

    /// A recorded move could not be re-applied while rebuilding history.
    #[error("replay entry {index} was rejected: {source}")]
    InvalidReplay { index: usize, source: MoveError },
}
