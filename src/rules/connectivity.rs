//! Breadth-first connectivity analysis over a board.
//!
//! All functions take an immutable board and return sets of coordinates.
//! Removing captured stones or flipping colors is left to the caller.
//!
//! - `neighbors`: up to 4 orthogonally adjacent points
//! - `group`: connected points sharing the start point's cell (any cell, Empty included)
//! - `has_liberty`: does a group touch an empty point
//! - `flood_fill`: empty region from a start point plus the stones bordering it
//!
//! Every traversal keeps a visited set, so each point is expanded at most once.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Board, Cell, Coord};

/// Orthogonal offsets.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An empty region and the stones around it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Territory {
    /// Empty points reachable from the start.
    pub points: FxHashSet<Coord>,
    /// Non-empty points adjacent to the region.
    pub borders: FxHashSet<Coord>,
}

impl Territory {
    /// The single cell shared by every border stone, if there is one.
    ///
    /// Returns `None` for regions with no borders or mixed borders.
    #[must_use]
    pub fn owner(&self, board: &Board) -> Option<Cell> {
        let mut cells = self.borders.iter().map(|&c| board[c]);
        let first = cells.next()?;
        cells.all(|c| c == first).then_some(first)
    }
}

/// In-bounds orthogonal neighbors of a point.
#[must_use]
pub fn neighbors(board: &Board, coord: Coord) -> SmallVec<[Coord; 4]> {
    ORTHOGONAL
        .iter()
        .filter_map(|&(dr, dc)| coord.offset(dr, dc, board.size()))
        .collect()
}

/// All points connected to `coord` through points of the same cell.
///
/// Includes `coord` itself. Works for any cell, so an empty start yields the
/// empty region around it.
#[must_use]
pub fn group(board: &Board, coord: Coord) -> FxHashSet<Coord> {
    let target = board[coord];
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(coord);
    queue.push_back(coord);

    while let Some(current) = queue.pop_front() {
        for next in neighbors(board, current) {
            if board[next] == target && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Check if any point adjacent to the group is empty.
#[must_use]
pub fn has_liberty(board: &Board, group: &FxHashSet<Coord>) -> bool {
    group
        .iter()
        .any(|&c| neighbors(board, c).iter().any(|&n| board[n].is_empty()))
}

/// Flood the empty region containing `start`.
///
/// Expands through empty points only; stones met along the way are
/// collected as borders and not expanded. A non-empty start yields an
/// empty territory.
#[must_use]
pub fn flood_fill(board: &Board, start: Coord) -> Territory {
    let mut territory = Territory::default();
    if !board[start].is_empty() {
        return territory;
    }

    let mut queue = VecDeque::new();
    territory.points.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in neighbors(board, current) {
            if board[next].is_empty() {
                if territory.points.insert(next) {
                    queue.push_back(next);
                }
            } else {
                territory.borders.insert(next);
            }
        }
    }

    territory
}
