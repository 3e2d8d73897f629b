//! Game configuration types.
//!
//! A game is created from a `GameConfig`:
//! - `GameKind`: which rule set (Go, Gomoku, Othello)
//! - board size, komi and the seed used to derive AI randomness
//!
//! Sizes 8, 9, 13 and 19 are the conventional choices. Othello ignores
//! the requested size and always plays on 8x8.

use serde::{Deserialize, Serialize};

/// Conventional board sizes.
pub const STANDARD_SIZES: [usize; 5] = [8, 9, 13, 15, 19];

/// Compensation added to White's score in Go.
pub const DEFAULT_KOMI: f64 = 6.5;

/// Which game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Go,
    Gomoku,
    Othello,
}

impl GameKind {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::Go => "Go",
            GameKind::Gomoku => "Gomoku",
            GameKind::Othello => "Othello",
        }
    }

    /// Lowercase key used for per-game statistics.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            GameKind::Go => "go",
            GameKind::Gomoku => "gomoku",
            GameKind::Othello => "othello",
        }
    }

    /// Board size this game uses by default.
    #[must_use]
    pub const fn default_size(self) -> usize {
        match self {
            GameKind::Go | GameKind::Gomoku => 19,
            GameKind::Othello => 8,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for creating a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule set.
    pub kind: GameKind,

    /// Requested side length. Othello overrides this with 8.
    pub size: usize,

    /// White's compensation in Go (ignored by other games).
    pub komi: f64,

    /// Seed for AI strategies created from this config.
    pub seed: u64,
}

impl GameConfig {
    /// Create a config with the conventional size for the game.
    #[must_use]
    pub fn for_kind(kind: GameKind) -> Self {
        Self {
            kind,
            size: kind.default_size(),
            komi: DEFAULT_KOMI,
            seed: 42,
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set komi.
    #[must_use]
    pub fn with_komi(mut self, komi: f64) -> Self {
        self.komi = komi;
        self
    }

    /// Set the AI seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check if the size is one of the conventional choices.
    #[must_use]
    pub fn is_standard_size(&self) -> bool {
        STANDARD_SIZES.contains(&self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_kind(GameKind::Go)
    }
}
