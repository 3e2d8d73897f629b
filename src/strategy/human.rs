use crate::core::{Move, Stone};
use crate::rules::RulesEngine;

use super::{Role, Strategy};

/// A person at the board.
///
/// Holds at most one submitted move; `make_move` hands it over and empties
/// the buffer. A second submission before that replaces the first.
#[derive(Clone, Debug)]
pub struct Human {
    color: Stone,
    pending: Option<Move>,
}

impl Human {
    #[must_use]
    pub fn new(color: Stone) -> Self {
        Self { color, pending: None }
    }

    /// The buffered move, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Move> {
        self.pending
    }
}

impl<G: RulesEngine> Strategy<G> for Human {
    fn role(&self) -> Role {
        Role::Human
    }

    fn color(&self) -> Stone {
        self.color
    }

    fn make_move(&mut self, _game: &G) -> Option<Move> {
        self.pending.take()
    }

    fn submit(&mut self, mv: Move) -> bool {
        self.pending = Some(mv);
        true
    }
}
