//! Area scoring.
//!
//! A color scores one point per stone on the board plus one point per
//! empty point in regions bordered only by that color. White adds komi.
//! Regions touching both colors, or no stones at all, are neutral.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Coord, Stone, Winner};
use crate::rules::flood_fill;

/// Final or provisional score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub black: f64,
    pub white: f64,
}

impl Score {
    /// Strict comparison; equal scores tie.
    #[must_use]
    pub fn winner(&self) -> Winner {
        if self.black > self.white {
            Winner::Black
        } else if self.white > self.black {
            Winner::White
        } else {
            Winner::Tie
        }
    }

    /// Text shown when the game ends.
    #[must_use]
    pub fn summary(&self) -> String {
        let verdict = match self.winner() {
            Winner::Black => "Black wins.",
            Winner::White => "White wins.",
            Winner::Tie => "It's a tie.",
        };
        format!("Black: {:.1} White: {:.1}. {}", self.black, self.white, verdict)
    }
}

/// Empty points owned by each color, as `(black, white)`.
#[must_use]
pub fn territory(board: &Board) -> (usize, usize) {
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let (mut black, mut white) = (0, 0);

    for start in board.empty_points() {
        if visited.contains(&start) {
            continue;
        }
        let region = flood_fill(board, start);
        match region.owner(board) {
            Some(Cell::Black) => black += region.points.len(),
            Some(Cell::White) => white += region.points.len(),
            _ => {}
        }
        visited.extend(region.points);
    }

    (black, white)
}

/// Dead stones removed before counting, as `(black, white)`.
///
/// Dead-stone detection is not performed; every stone on the board counts
/// as alive.
#[must_use]
pub fn dead_stones(_board: &Board) -> (usize, usize) {
    (0, 0)
}

/// Score a board.
///
/// Through round 2 the board is considered empty and only komi counts.
#[must_use]
pub fn score(board: &Board, komi: f64, round: u32) -> Score {
    if round <= 2 {
        return Score {
            black: 0.0,
            white: komi,
        };
    }

    let (black_territory, white_territory) = territory(board);
    let (dead_black, dead_white) = dead_stones(board);

    let black = board.count(Stone::Black) + black_territory + dead_white;
    let white = board.count(Stone::White) + white_territory + dead_black;

    Score {
        black: black as f64,
        white: white as f64 + komi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(board: &mut Board, col: usize, cell: Cell) {
        for row in 0..board.size() {
            board[Coord::new(row, col)] = cell;
        }
    }

    #[test]
    fn test_early_score_is_komi_only() {
        let board = Board::new(19);
        assert_eq!(score(&board, 6.5, 0), Score { black: 0.0, white: 6.5 });
        assert_eq!(score(&board, 6.5, 2), Score { black: 0.0, white: 6.5 });
    }

    #[test]
    fn test_split_board_territory() {
        // Black wall on column 2, White wall on column 3 of a 5x5 board
        let mut board = Board::new(5);
        wall(&mut board, 2, Cell::Black);
        wall(&mut board, 3, Cell::White);

        assert_eq!(territory(&board), (10, 5));

        let s = score(&board, 6.5, 10);
        assert_eq!(s.black, 15.0);
        assert_eq!(s.white, 16.5);
        assert_eq!(s.winner(), Winner::White);
    }

    #[test]
    fn test_neutral_region_scores_nothing() {
        let mut board = Board::new(3);
        board[Coord::new(0, 0)] = Cell::Black;
        board[Coord::new(2, 2)] = Cell::White;

        assert_eq!(territory(&board), (0, 0));
    }

    #[test]
    fn test_dead_stones_stub() {
        assert_eq!(dead_stones(&Board::new(9)), (0, 0));
    }

    #[test]
    fn test_winner_and_summary() {
        let tie = Score { black: 7.0, white: 7.0 };
        assert_eq!(tie.winner(), Winner::Tie);
        assert_eq!(tie.summary(), "Black: 7.0 White: 7.0. It's a tie.");

        let black = Score { black: 40.0, white: 36.5 };
        assert_eq!(black.summary(), "Black: 40.0 White: 36.5. Black wins.");
    }
}
