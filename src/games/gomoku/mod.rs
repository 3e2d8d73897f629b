//! Gomoku (five in a row).
//!
//! - Black moves first; every turn places one stone on an empty point
//! - Passing is not allowed
//! - Five or more in a row along any line wins immediately
//! - A full board with no line of five is a draw

mod game;

pub use game::{is_five, max_run, Gomoku, WIN_LENGTH};
