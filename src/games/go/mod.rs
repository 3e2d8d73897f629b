//! Go on an `N x N` board.
//!
//! - Black moves first; colors alternate every round, passes included
//! - A placement removes adjacent opponent groups left without liberties,
//!   then removes its own group if that group has none (self-capture is legal)
//! - Capturing exactly one stone forbids recapturing on that point next turn (ko)
//! - Two passes end the game; the board is area-scored with komi for White

mod game;
pub mod scoring;

pub use game::{Go, GoState};
pub use scoring::Score;
