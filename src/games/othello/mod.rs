//! Othello (Reversi) on an 8x8 board.
//!
//! - Four stones start in the center cross; Black moves first
//! - A placement must clamp at least one straight run of opponent stones
//!   against another of the mover's stones; every clamped run flips
//! - A player with no legal placement passes automatically
//! - The game ends when neither side can move; more stones wins

mod game;

pub use game::{flips, moves_for, starting_board, Othello, OTHELLO_SIZE};
