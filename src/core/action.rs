//! Move representation: a placement or a pass.
//!
//! Every transition of a game takes a `Move`. Replays are plain sequences
//! of moves, so re-applying them in order reconstructs a game exactly.

use serde::{Deserialize, Serialize};

use super::board::Coord;

/// A single turn: place a stone on a point, or pass.
///
/// ## Example
///
/// ```
/// use board_arena::core::{Coord, Move};
///
/// let place = Move::place(3, 4);
/// assert_eq!(place.coord(), Some(Coord::new(3, 4)));
///
/// assert!(Move::Pass.is_pass());
/// assert_eq!(Move::from(None), Move::Pass);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put a stone on the given point.
    Place(Coord),
    /// Skip the turn.
    Pass,
}

impl Move {
    /// Create a placement.
    #[must_use]
    pub const fn place(row: usize, col: usize) -> Self {
        Move::Place(Coord::new(row, col))
    }

    /// The target point, if this is a placement.
    #[must_use]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Move::Place(c) => Some(c),
            Move::Pass => None,
        }
    }

    /// Check if this move is a pass.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Coord> for Move {
    fn from(coord: Coord) -> Self {
        Move::Place(coord)
    }
}

impl From<Option<Coord>> for Move {
    fn from(coord: Option<Coord>) -> Self {
        coord.map_or(Move::Pass, Move::Place)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(c) => write!(f, "{c}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}
