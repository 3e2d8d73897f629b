use tracing::trace;

use crate::core::{GameRng, Move, Stone};
use crate::rules::RulesEngine;

use super::{Role, Strategy};

/// Tier 1: uniform choice among the available moves.
///
/// Passing is one more option when the game allows it. With nothing
/// available the strategy passes.
#[derive(Clone, Debug)]
pub struct RandomAi {
    color: Stone,
    rng: GameRng,
}

impl RandomAi {
    #[must_use]
    pub fn new(color: Stone, rng: GameRng) -> Self {
        Self { color, rng }
    }

    /// Pick a move for `game` without changing it.
    pub fn pick<G: RulesEngine>(&mut self, game: &G) -> Move {
        let mut options: Vec<Move> = game.available_moves().into_iter().map(Move::Place).collect();
        if game.allows_pass() {
            options.push(Move::Pass);
        }
        let choice = self.rng.choose(&options).copied().unwrap_or(Move::Pass);
        trace!(color = %self.color, options = options.len(), %choice, "random pick");
        choice
    }
}

impl<G: RulesEngine> Strategy<G> for RandomAi {
    fn role(&self) -> Role {
        Role::Ai
    }

    fn color(&self) -> Stone {
        self.color
    }

    fn make_move(&mut self, game: &G) -> Option<Move> {
        Some(self.pick(game))
    }
}

/// Tier 3: same behavior as tier 1 for now.
#[derive(Clone, Debug)]
pub struct UpgradedRandomAi {
    inner: RandomAi,
}

impl UpgradedRandomAi {
    #[must_use]
    pub fn new(color: Stone, rng: GameRng) -> Self {
        Self {
            inner: RandomAi::new(color, rng),
        }
    }
}

impl<G: RulesEngine> Strategy<G> for UpgradedRandomAi {
    fn role(&self) -> Role {
        Role::Ai
    }

    fn color(&self) -> Stone {
        self.inner.color
    }

    fn make_move(&mut self, game: &G) -> Option<Move> {
        Some(self.inner.pick(game))
    }
}
