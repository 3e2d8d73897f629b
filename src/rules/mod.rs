//! Shared rules machinery.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for the current player
//! - How a move modifies state
//! - Win/loss conditions
//!
//! This module also provides the pieces every game builds on: the
//! connectivity analyzer, snapshots/undo history and save files.

pub mod connectivity;
pub mod engine;
pub mod history;
pub mod persist;

pub use connectivity::{flood_fill, group, has_liberty, neighbors, Territory};
pub use engine::RulesEngine;
pub use history::{GameSnapshot, History, Memento, Position};
pub use persist::{Identities, SaveFile};
