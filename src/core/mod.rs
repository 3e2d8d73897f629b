//! Core engine types: cells, board, moves, configuration, RNG, errors.
//!
//! This module contains the building blocks shared by every game.
//! Rule sets live in `games`, built on the traits in `rules`.

pub mod cell;
pub mod board;
pub mod action;
pub mod config;
pub mod rng;
pub mod error;

pub use cell::{Cell, Stone, Winner};
pub use board::{Board, Coord};
pub use action::Move;
pub use config::{GameConfig, GameKind, DEFAULT_KOMI, STANDARD_SIZES};
pub use rng::GameRng;
pub use error::{MoveError, PersistError};
