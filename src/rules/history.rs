//! Snapshots and undo history.
//!
//! ## Position
//!
//! The mutable fields every game shares: board, round, game-over flag,
//! winner and the replay of moves played so far.
//!
//! ## Memento
//!
//! Immutable copy of a game's full state. The board is deep-copied; the
//! replay is an `im::Vector`, so copying it is O(1) while staying
//! independent of the live sequence.
//!
//! ## History
//!
//! Stack of mementos, one per accepted transition. Pushed before a move
//! mutates anything, popped on undo.

use std::fmt::Debug;

use im::Vector;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Move, Winner};

/// A complete game state that can be snapshotted and persisted.
///
/// Implemented by `Position` itself (Gomoku, Othello) and by states that
/// wrap a position with extra fields (Go).
pub trait GameSnapshot: Clone + Debug + PartialEq + Serialize + DeserializeOwned {
    /// The shared fields.
    fn position(&self) -> &Position;

    /// The shared fields, mutably.
    fn position_mut(&mut self) -> &mut Position;
}

/// Fields common to every game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Current board.
    pub board: Board,

    /// Number of accepted transitions. Even rounds are Black's.
    pub round: u32,

    /// Set once the game ends. Only restart or restore clears it.
    pub game_over: bool,

    /// Outcome, when decided.
    pub winner: Option<Winner>,

    /// Every accepted move in order, passes included.
    pub replay: Vector<Move>,
}

impl Position {
    /// Create a fresh position around a starting board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            round: 0,
            game_over: false,
            winner: None,
            replay: Vector::new(),
        }
    }

    /// Mark the game as finished.
    pub fn finish(&mut self, winner: Option<Winner>) {
        self.game_over = true;
        self.winner = winner;
    }
}

impl GameSnapshot for Position {
    fn position(&self) -> &Position {
        self
    }

    fn position_mut(&mut self) -> &mut Position {
        self
    }
}

/// Opaque snapshot of a game state.
///
/// Created by `RulesEngine::create_memento` and consumed by
/// `RulesEngine::restore_from_memento`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Memento<S> {
    state: S,
}

impl<S: GameSnapshot> Memento<S> {
    /// Capture a copy of `state`.
    #[must_use]
    pub fn capture(state: &S) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// The captured state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The captured shared fields.
    #[must_use]
    pub fn position(&self) -> &Position {
        self.state.position()
    }
}

/// Undo stack of mementos.
#[derive(Clone, Debug)]
pub struct History<S: Clone> {
    entries: Vector<Memento<S>>,
}

impl<S: GameSnapshot> History<S> {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vector::new(),
        }
    }

    /// Append a snapshot.
    pub fn push(&mut self, memento: Memento<S>) {
        self.entries.push_back(memento);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Memento<S>> {
        self.entries.pop_back()
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Memento<S>> {
        self.entries.last()
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Memento<S>> {
        self.entries.iter()
    }
}

impl<S: GameSnapshot> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}
