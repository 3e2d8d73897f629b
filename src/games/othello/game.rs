//! Othello game implementation.

use tracing::{info, warn};

use crate::core::{Board, Cell, Coord, GameConfig, GameKind, Move, MoveError, Stone, Winner};
use crate::rules::engine::reject;
use crate::rules::{History, Position, RulesEngine};

/// Othello is always played on an 8x8 board.
pub const OTHELLO_SIZE: usize = 8;

/// All eight scan directions.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The standard starting position.
#[must_use]
pub fn starting_board() -> Board {
    let mut board = Board::new(OTHELLO_SIZE);
    board[Coord::new(3, 3)] = Cell::White;
    board[Coord::new(3, 4)] = Cell::Black;
    board[Coord::new(4, 3)] = Cell::Black;
    board[Coord::new(4, 4)] = Cell::White;
    board
}

/// Opponent stones that `stone` would flip by playing at `coord`.
///
/// Empty when `coord` is occupied or clamps nothing, which is exactly when
/// the placement is illegal.
#[must_use]
pub fn flips(board: &Board, coord: Coord, stone: Stone) -> Vec<Coord> {
    if !board.contains(coord) || !board[coord].is_empty() {
        return Vec::new();
    }
    DIRECTIONS
        .iter()
        .flat_map(|&(dr, dc)| clamp(board, coord, stone, dr, dc))
        .collect()
}

/// Opponent run starting next to `coord` in one direction, if it is closed
/// off by a `stone` of the mover.
fn clamp(board: &Board, coord: Coord, stone: Stone, dr: isize, dc: isize) -> Vec<Coord> {
    let own = stone.cell();
    let other = stone.opponent().cell();
    let mut run = Vec::new();
    let mut current = coord;
    while let Some(next) = current.offset(dr, dc, board.size()) {
        let cell = board[next];
        if cell == other {
            run.push(next);
            current = next;
        } else if cell == own {
            return run;
        } else {
            break;
        }
    }
    Vec::new()
}

/// Legal placements for `stone` on `board`, in row-major order.
#[must_use]
pub fn moves_for(board: &Board, stone: Stone) -> Vec<Coord> {
    board
        .empty_points()
        .filter(|&coord| !flips(board, coord, stone).is_empty())
        .collect()
}

/// Othello on an 8x8 board.
#[derive(Clone, Debug)]
pub struct Othello {
    config: GameConfig,
    state: Position,
    history: History<Position>,
}

impl Othello {
    /// Create a game.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(GameConfig::for_kind(GameKind::Othello))
    }

    /// Legal placements for either color in the current position.
    #[must_use]
    pub fn available_moves_for(&self, stone: Stone) -> Vec<Coord> {
        moves_for(self.board(), stone)
    }

    /// Stones the current player would flip by playing at `coord`.
    #[must_use]
    pub fn flips_at(&self, coord: Coord) -> Vec<Coord> {
        flips(self.board(), coord, self.cur_player())
    }

    /// `(black, white)` stone counts.
    #[must_use]
    pub fn stone_counts(&self) -> (usize, usize) {
        (self.board().count(Stone::Black), self.board().count(Stone::White))
    }

    /// End the game when neither side can move, awarding the majority.
    fn check_end(&mut self) {
        let mover = self.cur_player();
        if !moves_for(&self.state.board, mover).is_empty()
            || !moves_for(&self.state.board, mover.opponent()).is_empty()
        {
            return;
        }
        let (black, white) = self.stone_counts();
        let winner = if black > white {
            Some(Winner::Black)
        } else if white > black {
            Some(Winner::White)
        } else {
            None
        };
        info!(black, white, ?winner, "no moves left for either side");
        self.state.finish(winner);
    }
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for Othello {
    type State = Position;

    fn from_config(mut config: GameConfig) -> Self {
        config.kind = GameKind::Othello;
        if config.size != OTHELLO_SIZE {
            warn!(requested = config.size, "othello is played on 8x8, ignoring size");
            config.size = OTHELLO_SIZE;
        }
        Self {
            config,
            state: Position::new(starting_board()),
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
        Position::new(starting_board())
    }

    fn available_moves(&self) -> Vec<Coord> {
        if self.is_game_over() {
            return Vec::new();
        }
        moves_for(self.board(), self.cur_player())
    }

    fn allows_pass(&self) -> bool {
        false
    }

    fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        let round = self.round();
        if self.is_game_over() {
            return Err(reject(GameKind::Othello, round, MoveError::GameOver));
        }

        let mover = self.cur_player();
        let available = self.available_moves();

        if available.is_empty() {
            // Forced pass: whatever was submitted, the turn goes over.
            self.record(Move::Pass);
            info!(player = %mover, round, "no legal placement, passing");
        } else {
            let coord = match mv {
                Move::Pass => {
                    return Err(reject(GameKind::Othello, round, MoveError::PassNotAllowed));
                }
                Move::Place(coord) if !self.board().contains(coord) => {
                    return Err(reject(GameKind::Othello, round, MoveError::OutOfBounds(coord)));
                }
                Move::Place(coord) if !available.contains(&coord) => {
                    return Err(reject(GameKind::Othello, round, MoveError::IllegalMove(coord)));
                }
                Move::Place(coord) => coord,
            };

            let flipped = flips(&self.state.board, coord, mover);
            self.record(mv);
            self.state.board[coord] = mover.cell();
            for point in flipped {
                self.state.board[point] = mover.cell();
            }
        }

        self.state.round += 1;
        self.check_end();
        Ok(())
    }
}
