//! Board coordinates and the square grid of cells.
//!
//! ## Coord
//!
//! 0-based `(row, col)` pair. Bounds are checked against a board size.
//!
//! ## Board
//!
//! Row-major `N x N` grid backed by a `Vec<Cell>` for O(1) access.
//! Cloning a board copies every cell, so snapshots never alias the live grid.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::{Cell, Stone};

/// A point on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate lies on a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step by a signed offset, returning `None` when leaving the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Coord::new(row, col);
        next.in_bounds(size).then_some(next)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells.
///
/// ## Example
///
/// ```
/// use board_arena::core::{Board, Cell, Coord};
///
/// let mut board = Board::new(9);
/// assert_eq!(board[Coord::new(4, 4)], Cell::Empty);
///
/// board[Coord::new(4, 4)] = Cell::Black;
/// assert_eq!(board[Coord::new(4, 4)], Cell::Black);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of `size x size` points.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a coordinate is on this board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Get a cell, or `None` when off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.size + coord.col])
    }

    /// Set a cell. Off-board coordinates are ignored.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if self.contains(coord) {
            self.cells[coord.row * self.size + coord.col] = cell;
        }
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().map(move |c| (c, self[c]))
    }

    /// Iterate over all empty points.
    pub fn empty_points(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(|(_, cell)| cell.is_empty()).map(|(c, _)| c)
    }

    /// Number of stones of a color.
    #[must_use]
    pub fn count(&self, stone: Stone) -> usize {
        let cell = stone.cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check if every point is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.row * self.size + coord.col]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        &mut self.cells[coord.row * self.size + coord.col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| match self[Coord::new(row, col)] {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.size(), 9);
        assert_eq!(board.empty_points().count(), 81);
        assert_eq!(board.count(Stone::Black), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(8);
        assert_eq!(board.get(Coord::new(7, 7)), Some(Cell::Empty));
        assert_eq!(board.get(Coord::new(8, 0)), None);
        assert_eq!(board.get(Coord::new(0, 8)), None);
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::new(9);
        board.set(Coord::new(0, 0), Cell::Black);
        board.set(Coord::new(0, 1), Cell::White);
        board.set(Coord::new(20, 20), Cell::White); // ignored

        assert_eq!(board.count(Stone::Black), 1);
        assert_eq!(board.count(Stone::White), 1);
        assert_eq!(board.empty_points().count(), 79);
    }

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(0, 0);
        assert_eq!(c.offset(-1, 0, 9), None);
        assert_eq!(c.offset(1, 1, 9), Some(Coord::new(1, 1)));
        assert_eq!(Coord::new(8, 8).offset(0, 1, 9), None);
    }

    #[test]
    fn test_coords_row_major() {
        let board = Board::new(2);
        let coords: Vec<_> = board.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut board = Board::new(3);
        let snapshot = board.clone();
        board[Coord::new(1, 1)] = Cell::White;

        assert_eq!(snapshot[Coord::new(1, 1)], Cell::Empty);
        assert_ne!(board, snapshot);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        for c in board.coords().collect::<Vec<_>>() {
            board[c] = Cell::Black;
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2);
        board[Coord::new(0, 1)] = Cell::Black;
        board[Coord::new(1, 0)] = Cell::White;
        assert_eq!(format!("{board}"), ".X\nO.\n");
    }
}
