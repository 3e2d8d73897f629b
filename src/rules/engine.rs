//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are available
//! - How a move changes the state
//! - When the game ends and who won
//!
//! Everything else (undo, restart, surrender, snapshots, replay, save and
//! load) is provided on top of those pieces.

use std::path::Path;

use im::Vector;
use tracing::{debug, info, warn};

use super::history::{GameSnapshot, History, Memento};
use super::persist::{Identities, SaveFile};
use crate::core::{Board, Coord, GameConfig, GameKind, Move, MoveError, PersistError, Stone, Winner};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `play` must call `record` before mutating state, exactly once per
///   accepted transition, and must leave state untouched when it returns `Err`
/// - `play` must be deterministic so replays reproduce games exactly
/// - `initial_state` returns the starting position for the configured size
pub trait RulesEngine: Sized {
    /// Full mutable state, captured by mementos.
    type State: GameSnapshot;

    /// Create a new game.
    fn from_config(config: GameConfig) -> Self;

    /// The configuration this game was created with.
    fn config(&self) -> &GameConfig;

    /// Current state.
    fn state(&self) -> &Self::State;

    /// Current state, mutably.
    fn state_mut(&mut self) -> &mut Self::State;

    /// Undo history.
    fn history(&self) -> &History<Self::State>;

    /// Undo history, mutably.
    fn history_mut(&mut self) -> &mut History<Self::State>;

    /// Starting state for this game's board size.
    fn initial_state(&self) -> Self::State;

    /// Legal placements for the current player.
    fn available_moves(&self) -> Vec<Coord>;

    /// Check if the current player may pass voluntarily.
    fn allows_pass(&self) -> bool;

    /// Apply a move.
    ///
    /// On `Err` nothing changes and the round does not advance.
    fn play(&mut self, mv: Move) -> Result<(), MoveError>;

    // === Accessors ===

    /// Which game this is.
    fn kind(&self) -> GameKind {
        self.config().kind
    }

    /// Current board.
    fn board(&self) -> &Board {
        &self.state().position().board
    }

    /// Board side length.
    fn size(&self) -> usize {
        self.board().size()
    }

    /// Number of accepted transitions so far.
    fn round(&self) -> u32 {
        self.state().position().round
    }

    /// Check if the game has ended.
    fn is_game_over(&self) -> bool {
        self.state().position().game_over
    }

    /// The outcome, when decided.
    fn winner(&self) -> Option<Winner> {
        self.state().position().winner
    }

    /// Moves accepted so far, in order.
    fn replay(&self) -> &Vector<Move> {
        &self.state().position().replay
    }

    /// Color to move.
    fn cur_player(&self) -> Stone {
        Stone::for_round(self.round())
    }

    /// Alias for `available_moves`.
    fn check_available_moves(&self) -> Vec<Coord> {
        self.available_moves()
    }

    // === Snapshots ===

    /// Capture the full current state.
    fn create_memento(&self) -> Memento<Self::State> {
        Memento::capture(self.state())
    }

    /// Overwrite the current state from a snapshot.
    ///
    /// History is not touched.
    fn restore_from_memento(&mut self, memento: &Memento<Self::State>) {
        *self.state_mut() = memento.state().clone();
    }

    /// Push a snapshot of the current state and append `mv` to the replay.
    ///
    /// Called by `play` before it mutates anything.
    fn record(&mut self, mv: Move) {
        let memento = self.create_memento();
        self.history_mut().push(memento);
        self.state_mut().position_mut().replay.push_back(mv);
    }

    // === Lifecycle ===

    /// Revert the most recent transition.
    ///
    /// With nothing to undo, restarts the game instead.
    fn undo(&mut self) {
        match self.history_mut().pop() {
            Some(memento) => self.restore_from_memento(&memento),
            None => {
                warn!(kind = %self.kind(), "nothing to undo, restarting");
                self.restart();
            }
        }
    }

    /// Reset to the starting position and clear history.
    fn restart(&mut self) {
        let initial = self.initial_state();
        *self.state_mut() = initial;
        self.history_mut().clear();
        info!(kind = %self.kind(), size = self.size(), "game restarted");
    }

    /// End the game in favor of the opponent of the player to move.
    fn surrender(&mut self) {
        if self.is_game_over() {
            return;
        }
        let loser = self.cur_player();
        self.state_mut()
            .position_mut()
            .finish(Some(Winner::from(loser.opponent())));
        info!(kind = %self.kind(), %loser, "player surrendered");
    }

    // === Replay ===

    /// A fresh game of the same kind and size.
    fn fresh(&self) -> Self {
        Self::from_config(self.config().clone().with_size(self.size()))
    }

    /// Rebuild the game from its replay on a fresh instance.
    ///
    /// Returns the first rejected entry as an error.
    fn replayed(&self) -> Result<Self, PersistError> {
        let mut game = self.fresh();
        for (index, &mv) in self.replay().iter().enumerate() {
            game.play(mv)
                .map_err(|source| PersistError::InvalidReplay { index, source })?;
        }
        Ok(game)
    }

    /// Every intermediate state of the replay, starting position first.
    fn playback_states(&self) -> Result<Vec<Self::State>, PersistError> {
        let mut game = self.fresh();
        let mut states = vec![game.state().clone()];
        for (index, &mv) in self.replay().iter().enumerate() {
            game.play(mv)
                .map_err(|source| PersistError::InvalidReplay { index, source })?;
            states.push(game.state().clone());
        }
        Ok(states)
    }

    // === Persistence ===

    /// Save the current state to `path`.
    fn save(&self, path: impl AsRef<Path>, identities: Option<&Identities>) -> Result<(), PersistError> {
        SaveFile {
            kind: self.kind(),
            size: self.size(),
            identities: identities.cloned(),
            memento: self.create_memento(),
        }
        .write(path)
    }

    /// Load a saved state from `path`.
    ///
    /// Returns `Ok(false)` and leaves the game unchanged when the file was
    /// saved for different identities. The undo history is rebuilt from the
    /// saved replay.
    fn load(&mut self, path: impl AsRef<Path>, identities: Option<&Identities>) -> Result<bool, PersistError> {
        let file: SaveFile<Self::State> = SaveFile::read(path)?;
        if file.kind != self.kind() {
            return Err(PersistError::KindMismatch {
                expected: self.kind(),
                found: file.kind,
            });
        }
        if !file.accepts(identities) {
            warn!(kind = %self.kind(), "save file belongs to other players, not loading");
            return Ok(false);
        }

        let mut game = Self::from_config(self.config().clone().with_size(file.size));
        for (index, &mv) in file.memento.position().replay.iter().enumerate() {
            game.play(mv)
                .map_err(|source| PersistError::InvalidReplay { index, source })?;
        }
        game.restore_from_memento(&file.memento);
        *self = game;

        info!(kind = %self.kind(), round = self.round(), "game loaded");
        Ok(true)
    }
}

/// Log a rejected move and hand the error back.
pub(crate) fn reject(kind: GameKind, round: u32, err: MoveError) -> MoveError {
    debug!(%kind, round, reason = %err, "move rejected");
    err
}
