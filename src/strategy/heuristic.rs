//! Tier 2: one-ply evaluation.
//!
//! Each game rates a candidate placement for the player to move. The
//! strategy plays the best-rated available point; the first candidate in
//! row-major order wins ties. Games without an evaluation fall back to a
//! random pick.

use tracing::trace;

use crate::core::{Coord, GameRng, Move, Stone};
use crate::games::gomoku::max_run;
use crate::games::othello::{flips, moves_for};
use crate::games::{Go, Gomoku, Othello};
use crate::rules::RulesEngine;

use super::random::RandomAi;
use super::{Role, Strategy};

/// Rating of a candidate placement for the player to move.
pub trait Evaluate: RulesEngine {
    /// Higher is better. `None` means the game has no evaluation.
    ///
    /// Must not change the game; simulations run on copies.
    fn evaluate(&self, coord: Coord) -> Option<f64>;
}

impl Evaluate for Go {
    fn evaluate(&self, _coord: Coord) -> Option<f64> {
        None
    }
}

impl Evaluate for Gomoku {
    fn evaluate(&self, coord: Coord) -> Option<f64> {
        Some(max_run(self.board(), coord, self.cur_player()) as f64)
    }
}

impl Evaluate for Othello {
    fn evaluate(&self, coord: Coord) -> Option<f64> {
        let last = self.size() - 1;
        let on_row_edge = coord.row == 0 || coord.row == last;
        let on_col_edge = coord.col == 0 || coord.col == last;
        if on_row_edge && on_col_edge {
            return Some(f64::INFINITY);
        }

        let me = self.cur_player();
        let flipped = flips(self.board(), coord, me);

        let mut board = self.board().clone();
        board[coord] = me.cell();
        for &point in &flipped {
            board[point] = me.cell();
        }
        let reply = moves_for(&board, me.opponent())
            .into_iter()
            .map(|c| flips(&board, c, me.opponent()).len())
            .max()
            .unwrap_or(0);

        let edge_bonus = if on_row_edge || on_col_edge { 0.5 } else { 0.0 };
        Some(flipped.len() as f64 + edge_bonus - reply as f64)
    }
}

/// Tier 2 strategy.
#[derive(Clone, Debug)]
pub struct HeuristicAi {
    fallback: RandomAi,
    color: Stone,
}

impl HeuristicAi {
    #[must_use]
    pub fn new(color: Stone, rng: GameRng) -> Self {
        Self {
            fallback: RandomAi::new(color, rng),
            color,
        }
    }

    /// Best-rated available point, or `None` when nothing can be rated.
    pub fn best<G: Evaluate>(&self, game: &G) -> Option<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        for coord in game.available_moves() {
            let score = game.evaluate(coord)?;
            trace!(color = %self.color, %coord, score, "candidate");
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((coord, score));
            }
        }
        best.map(|(coord, _)| coord)
    }
}

impl<G: Evaluate> Strategy<G> for HeuristicAi {
    fn role(&self) -> Role {
        Role::Ai
    }

    fn color(&self) -> Stone {
        self.color
    }

    fn make_move(&mut self, game: &G) -> Option<Move> {
        match self.best(game) {
            Some(coord) => Some(Move::Place(coord)),
            None => Some(self.fallback.pick(game)),
        }
    }
}
