//! Game implementations.
//!
//! Each game implements `RulesEngine` and owns its state, history and
//! configuration.

pub mod go;
pub mod gomoku;
pub mod othello;

pub use go::Go;
pub use gomoku::Gomoku;
pub use othello::Othello;
