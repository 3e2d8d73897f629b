//! # board-arena
//!
//! Rules engines for Go, Gomoku and Othello with undo, replay, save files
//! and simple AI opponents.
//!
//! ## Design Principles
//!
//! 1. **One Lifecycle**: Every game implements `RulesEngine`. Undo,
//!    restart, surrender, replay and persistence are shared on top of it.
//!
//! 2. **Snapshots, Not Diffs**: Each accepted move pushes a full memento of
//!    the state first, so undo is a restore and never a reverse computation.
//!
//! 3. **Deterministic**: `play` depends only on the state and the move, and
//!    AI randomness comes from seeded `GameRng` streams. Replaying a game's
//!    move list always reproduces it exactly.
//!
//! ## Modules
//!
//! - `core`: Cells, board, moves, configuration, RNG, errors
//! - `rules`: `RulesEngine`, connectivity analysis, history, save files
//! - `games`: Go, Gomoku and Othello
//! - `strategy`: Human input and three AI tiers
//! - `session`: Match driver with one-shot outcome reporting
//!
//! ```
//! use board_arena::{Gomoku, Move, RulesEngine};
//!
//! let mut game = Gomoku::new(15);
//! game.play(Move::place(7, 7)).unwrap();
//! assert_eq!(game.round(), 1);
//! assert!(game.play(Move::place(7, 7)).is_err());
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod strategy;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Stone, Winner,
    Move,
    GameConfig, GameKind,
    GameRng,
    MoveError, PersistError,
};

pub use crate::rules::{RulesEngine, History, Memento, Position, Identities, SaveFile};

pub use crate::games::{Go, Gomoku, Othello};

pub use crate::strategy::{AiTier, Evaluate, HeuristicAi, Human, RandomAi, Role, Strategy, UpgradedRandomAi};

pub use crate::session::{GameRecord, Match, Participant, RecordSink};
