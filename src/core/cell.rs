//! Cell colors, stone colors and game outcomes.
//!
//! ## Stone
//!
//! The color of a player: Black moves on even rounds, White on odd ones.
//!
//! ## Cell
//!
//! The content of one board point. Every point holds exactly one `Cell`.
//!
//! ## Winner
//!
//! Outcome of a finished game. Games that end without a decision may leave
//! the winner unset instead of reporting `Tie`.

use serde::{Deserialize, Serialize};

/// A player's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// The color that moves on the given round.
    ///
    /// ```
    /// use board_arena::core::Stone;
    ///
    /// assert_eq!(Stone::for_round(0), Stone::Black);
    /// assert_eq!(Stone::for_round(7), Stone::White);
    /// ```
    #[must_use]
    pub const fn for_round(round: u32) -> Self {
        if round % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// The cell this color occupies on the board.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// Content of a single board point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Check if no stone occupies this point.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The stone on this point, if any.
    #[must_use]
    pub const fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Stone::Black),
            Cell::White => Some(Stone::White),
        }
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        stone.cell()
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
    /// Equal scores.
    Tie,
}

impl Winner {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(self, stone: Stone) -> bool {
        matches!(
            (self, stone),
            (Winner::Black, Stone::Black) | (Winner::White, Stone::White)
        )
    }
}

impl From<Stone> for Winner {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Winner::Black,
            Stone::White => Winner::White,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Black => write!(f, "Black"),
            Winner::White => write!(f, "White"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}
