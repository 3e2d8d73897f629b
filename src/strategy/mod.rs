//! Move selection for each seat.
//!
//! A `Strategy` looks at the game and proposes the next move for its color.
//! Strategies never mutate the game they are handed; the driver applies the
//! returned move through `RulesEngine::play`.
//!
//! - `Human`: replays a move supplied from outside, once
//! - `RandomAi` (tier 1): uniform over available moves
//! - `HeuristicAi` (tier 2): one-ply evaluation per game
//! - `UpgradedRandomAi` (tier 3): currently plays like tier 1

mod human;
mod random;
mod heuristic;

pub use human::Human;
pub use random::{RandomAi, UpgradedRandomAi};
pub use heuristic::{Evaluate, HeuristicAi};

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Move, Stone};
use crate::rules::RulesEngine;

/// Who is behind a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Human,
    Ai,
}

/// AI difficulty tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiTier {
    Random,
    Heuristic,
    UpgradedRandom,
}

impl AiTier {
    /// Tier number shown to players (1 to 3).
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            AiTier::Random => 1,
            AiTier::Heuristic => 2,
            AiTier::UpgradedRandom => 3,
        }
    }
}

/// Move selection for one color.
pub trait Strategy<G: RulesEngine> {
    /// Human or AI.
    fn role(&self) -> Role;

    /// The color this strategy plays.
    fn color(&self) -> Stone;

    /// Propose a move for the current position.
    ///
    /// `None` means no decision is available yet (a human who has not
    /// submitted anything). Implementations must not change `game`.
    fn make_move(&mut self, game: &G) -> Option<Move>;

    /// Hand an externally chosen move to the strategy.
    ///
    /// Returns `false` when the strategy does not take outside input.
    fn submit(&mut self, _mv: Move) -> bool {
        false
    }

    /// Check if a person is behind this strategy.
    fn is_human(&self) -> bool {
        self.role() == Role::Human
    }
}

/// Build an AI strategy of the given tier.
#[must_use]
pub fn ai<G>(tier: AiTier, color: Stone, rng: GameRng) -> Box<dyn Strategy<G>>
where
    G: Evaluate + 'static,
{
    match tier {
        AiTier::Random => Box::new(RandomAi::new(color, rng)),
        AiTier::Heuristic => Box::new(HeuristicAi::new(color, rng)),
        AiTier::UpgradedRandom => Box::new(UpgradedRandomAi::new(color, rng)),
    }
}
