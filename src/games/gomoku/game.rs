//! Gomoku game implementation.

use tracing::{info, warn};

use crate::core::{Board, Coord, GameConfig, GameKind, Move, MoveError, Stone, Winner};
use crate::rules::engine::reject;
use crate::rules::{History, Position, RulesEngine};

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// The four line families: horizontal, vertical and both diagonals.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Longest line of `stone` through `coord`, counting `coord` as `stone`.
///
/// The board is not modified; `coord` may be empty, which makes this usable
/// to rate a placement before it is made.
#[must_use]
pub fn max_run(board: &Board, coord: Coord, stone: Stone) -> usize {
    AXES.iter()
        .map(|&(dr, dc)| 1 + ray(board, coord, stone, dr, dc) + ray(board, coord, stone, -dr, -dc))
        .max()
        .unwrap_or(1)
}

/// Check if `coord` completes five or more in a row for `stone`.
#[must_use]
pub fn is_five(board: &Board, coord: Coord, stone: Stone) -> bool {
    max_run(board, coord, stone) >= WIN_LENGTH
}

/// Contiguous `stone` cells walking from `coord` (exclusive) by `(dr, dc)`.
fn ray(board: &Board, coord: Coord, stone: Stone, dr: isize, dc: isize) -> usize {
    let cell = stone.cell();
    let mut count = 0;
    let mut current = coord;
    while let Some(next) = current.offset(dr, dc, board.size()) {
        if board[next] != cell {
            break;
        }
        count += 1;
        current = next;
    }
    count
}

/// Gomoku (five in a row) on an `N x N` board.
#[derive(Clone, Debug)]
pub struct Gomoku {
    config: GameConfig,
    state: Position,
    history: History<Position>,
}

impl Gomoku {
    /// Create a game on a board of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::from_config(GameConfig::for_kind(GameKind::Gomoku).with_size(size))
    }

    /// Longest line the current player would make by playing at `coord`.
    #[must_use]
    pub fn rate(&self, coord: Coord) -> usize {
        max_run(self.board(), coord, self.cur_player())
    }
}

impl RulesEngine for Gomoku {
    type State = Position;

    fn from_config(mut config: GameConfig) -> Self {
        config.kind = GameKind::Gomoku;
        if config.size == 0 {
            warn!("board size 0 requested, using 1");
            config.size = 1;
        }
        if !config.is_standard_size() {
            warn!(size = config.size, "unusual board size");
        }
        let state = Position::new(Board::new(config.size));
        Self {
            config,
            state,
            history: History::new(),
        }
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn state(&self) -> &Position {
        &self.state
    }

    fn state_mut(&mut self) -> &mut Position {
        &mut self.state
    }

    fn history(&self) -> &History<Position> {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History<Position> {
        &mut self.history
    }

    fn initial_state(&self) -> Position {
        Position::new(Board::new(self.config.size))
    }

    fn available_moves(&self) -> Vec<Coord> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board().empty_points().collect()
    }

    fn allows_pass(&self) -> bool {
        false
    }

    fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        let round = self.round();
        if self.is_game_over() {
            return Err(reject(GameKind::Gomoku, round, MoveError::GameOver));
        }
        let Move::Place(coord) = mv else {
            return Err(reject(GameKind::Gomoku, round, MoveError::PassNotAllowed));
        };
        if !self.board().contains(coord) {
            return Err(reject(GameKind::Gomoku, round, MoveError::OutOfBounds(coord)));
        }
        if !self.board()[coord].is_empty() {
            return Err(reject(GameKind::Gomoku, round, MoveError::Occupied(coord)));
        }

        self.record(mv);
        let mover = self.cur_player();
        self.state.board[coord] = mover.cell();
        self.state.round += 1;

        if is_five(&self.state.board, coord, mover) {
            info!(winner = %mover, %coord, "five in a row");
            self.state.finish(Some(Winner::from(mover)));
        } else if self.state.board.is_full() {
            info!("board full, game drawn");
            self.state.finish(Some(Winner::Tie));
        }

        Ok(())
    }
}
