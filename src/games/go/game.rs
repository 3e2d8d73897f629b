//! Go game implementation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::scoring::{self, Score};
use crate::core::{Board, Cell, Coord, GameConfig, GameKind, Move, MoveError};
use crate::rules::engine::reject;
use crate::rules::{group, has_liberty, neighbors, GameSnapshot, History, Position, RulesEngine};

/// Go state: the shared position plus ko, pass and scoring fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoState {
    pub position: Position,

    /// White's compensation.
    pub komi: f64,

    /// Point forbidden for the next move after a single-stone capture.
    pub ko_point: Option<Coord>,

    /// Number of passes so far. Only passes touch it.
    pub abstention: u32,

    /// Result text, set when the game ends by passing.
    pub final_score: Option<String>,
}

impl GameSnapshot for GoState {
    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }
}

/// Go on an `N x N` board.
#[derive(Clone, Debug)]
pub struct Go {
    config: GameConfig,
    state: GoState,
    history: History<GoState>,
}

impl Go {
    /// Create a game on a board of the given size with default komi.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::from_config(GameConfig::for_kind(GameKind::Go).with_size(size))
    }

    /// White's compensation.
    #[must_use]
    pub fn komi(&self) -> f64 {
        self.state.komi
    }

    /// Point currently forbidden by ko.
    #[must_use]
    pub fn ko_point(&self) -> Option<Coord> {
        self.state.ko_point
    }

    /// Passes made so far.
    #[must_use]
    pub fn abstention(&self) -> u32 {
        self.state.abstention
    }

    /// Result text once the game has been scored.
    #[must_use]
    pub fn final_score(&self) -> Option<&str> {
        self.state.final_score.as_deref()
    }

    /// Score the current board.
    #[must_use]
    pub fn score(&self) -> Score {
        scoring::score(&self.state.position.board, self.state.komi, self.round())
    }

    fn check_placement(&self, coord: Coord) -> Result<(), MoveError> {
        let round = self.round();
        if !self.board().contains(coord) {
            return Err(reject(GameKind::Go, round, MoveError::OutOfBounds(coord)));
        }
        if self.state.ko_point == Some(coord) {
            return Err(reject(GameKind::Go, round, MoveError::KoViolation(coord)));
        }
        if !self.board()[coord].is_empty() {
            return Err(reject(GameKind::Go, round, MoveError::Occupied(coord)));
        }
        Ok(())
    }

    /// Place the current player's stone, clear dead opponent groups, then
    /// clear the placed stone's own group if it has no liberty.
    ///
    /// Returns the opponent stones removed.
    fn place_stone(&mut self, coord: Coord) -> FxHashSet<Coord> {
        let me = self.cur_player();
        let opponent = me.opponent().cell();
        let board = &mut self.state.position.board;

        board[coord] = me.cell();

        let mut captured = FxHashSet::default();
        for next in neighbors(board, coord) {
            if board[next] != opponent || captured.contains(&next) {
                continue;
            }
            let string = group(board, next);
            if !has_liberty(board, &string) {
                captured.extend(string);
            }
        }
        for &c in &captured {
            board[c] = Cell::Empty;
        }

        let own = group(board, coord);
        if !has_liberty(board, &own) {
            for c in own {
                board[c] = Cell::Empty;
            }
        }

        captured
    }

    fn finish_by_score(&mut self) {
        let score = self.score();
        let winner = score.winner();
        let summary = score.summary();
        info!(black = score.black, white = score.white, %winner, "go game over");

        self.state.position.finish(Some(winner));
        self.state.final_score = Some(summary);
    }
}

impl RulesEngine for Go {
    type State = GoState;

    fn from_config(mut config: GameConfig) -> Self {
        config.kind = GameKind::Go;
        if config.size == 0 {
            warn!("board size 0 requested, using 1");
            config.size = 1;
        }
        if !config.is_standard_size() {
            warn!(size = config.size, "unusual board size");
        }
        let state = GoState {
            position: Position::new(Board::new(config.size)),
            komi: config.komi,
            ko_point: None,
            abstention: 0,
            final_score: None,
        };
        Self {
            config,
            state,
            history: History::new(),
        }
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn state(&self) -> &GoState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GoState {
        &mut self.state
    }

    fn history(&self) -> &History<GoState> {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History<GoState> {
        &mut self.history
    }

    fn initial_state(&self) -> GoState {
        Self::from_config(self.config.clone()).state
    }

    fn available_moves(&self) -> Vec<Coord> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board()
            .empty_points()
            .filter(|&c| self.state.ko_point != Some(c))
            .collect()
    }

    fn allows_pass(&self) -> bool {
        !self.is_game_over()
    }

    fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(reject(GameKind::Go, self.round(), MoveError::GameOver));
        }

        match mv {
            Move::Pass => {
                self.record(mv);
                self.state.ko_point = None;
                self.state.abstention += 1;
                if self.state.abstention >= 2 {
                    self.finish_by_score();
                }
            }
            Move::Place(coord) => {
                self.check_placement(coord)?;
                self.record(mv);
                let captured = self.place_stone(coord);
                self.state.ko_point = if captured.len() == 1 {
                    captured.into_iter().next()
                } else {
                    None
                };
            }
        }

        self.state.position.round += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Stone, Winner};

    /// Play a sequence of placements, alternating colors from Black.
    fn play_all(game: &mut Go, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            game.play(Move::place(r, c)).unwrap();
        }
    }

    #[test]
    fn test_game_creation() {
        let game = Go::new(19);

        assert_eq!(game.size(), 19);
        assert_eq!(game.round(), 0);
        assert_eq!(game.komi(), 6.5);
        assert_eq!(game.cur_player(), Stone::Black);
        assert_eq!(game.available_moves().len(), 361);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_unusual_sizes_still_play() {
        let game = Go::new(7);
        assert!(!game.config().is_standard_size());
        assert_eq!(game.size(), 7);
        assert_eq!(game.available_moves().len(), 49);

        let empty = Go::new(0);
        assert_eq!(empty.size(), 1);
        assert!(!empty.config().is_standard_size());
    }

    #[test]
    fn test_alternating_colors() {
        let mut game = Go::new(9);
        play_all(&mut game, &[(0, 0), (8, 8)]);

        assert_eq!(game.board()[Coord::new(0, 0)], Cell::Black);
        assert_eq!(game.board()[Coord::new(8, 8)], Cell::White);
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_occupied_point_rejected() {
        let mut game = Go::new(9);
        play_all(&mut game, &[(4, 4)]);

        let err = game.play(Move::place(4, 4));
        assert_eq!(err, Err(MoveError::Occupied(Coord::new(4, 4))));
        assert_eq!(game.round(), 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Go::new(9);
        assert_eq!(
            game.play(Move::place(9, 0)),
            Err(MoveError::OutOfBounds(Coord::new(9, 0)))
        );
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn test_single_stone_capture() {
        let mut game = Go::new(19);
        // White stone at (5,5) surrounded by Black
        play_all(
            &mut game,
            &[(4, 5), (5, 5), (6, 5), (0, 0), (5, 4), (0, 2)],
        );
        assert_eq!(game.board()[Coord::new(5, 5)], Cell::White);

        game.play(Move::place(5, 6)).unwrap();

        assert_eq!(game.board()[Coord::new(5, 5)], Cell::Empty);
        assert_eq!(game.board().count(Stone::White), 2);
        assert_eq!(game.ko_point(), Some(Coord::new(5, 5)));
    }

    #[test]
    fn test_group_capture_clears_ko() {
        let mut game = Go::new(9);
        // Two white stones at (0,0),(0,1) captured together
        play_all(
            &mut game,
            &[(1, 0), (0, 0), (1, 1), (0, 1), (8, 8), (8, 7)],
        );
        game.play(Move::place(0, 2)).unwrap();

        assert_eq!(game.board()[Coord::new(0, 0)], Cell::Empty);
        assert_eq!(game.board()[Coord::new(0, 1)], Cell::Empty);
        assert_eq!(game.ko_point(), None);
    }

    #[test]
    fn test_self_capture_removes_own_group() {
        let mut game = Go::new(9);
        // White surrounds (0,0); Black plays into it
        play_all(&mut game, &[(5, 5), (0, 1), (5, 6), (1, 0)]);
        game.play(Move::place(0, 0)).unwrap();

        assert_eq!(game.board()[Coord::new(0, 0)], Cell::Empty);
        assert_eq!(game.board()[Coord::new(0, 1)], Cell::White);
        assert_eq!(game.round(), 5);
    }

    #[test]
    fn test_ko_recapture_rejected() {
        let mut game = Go::new(9);
        // Classic ko shape around (1,1)/(1,2)
        play_all(
            &mut game,
            &[
                (0, 1), // B
                (0, 2), // W
                (1, 0), // B
                (1, 3), // W
                (2, 1), // B
                (2, 2), // W
                (8, 8), // B
                (1, 1), // W, last liberty at (1,2)
            ],
        );
        // Black captures the white stone at (1,1)
        game.play(Move::place(1, 2)).unwrap();
        assert_eq!(game.board()[Coord::new(1, 1)], Cell::Empty);
        assert_eq!(game.ko_point(), Some(Coord::new(1, 1)));

        // White may not retake immediately
        let round = game.round();
        assert_eq!(
            game.play(Move::place(1, 1)),
            Err(MoveError::KoViolation(Coord::new(1, 1)))
        );
        assert_eq!(game.round(), round);
        assert!(!game.available_moves().contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_ko_lifts_after_other_move() {
        let mut game = Go::new(9);
        play_all(
            &mut game,
            &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2), (8, 8), (1, 1), (1, 2)],
        );
        assert!(game.ko_point().is_some());

        // White plays elsewhere, ko clears
        game.play(Move::place(7, 7)).unwrap();
        assert_eq!(game.ko_point(), None);
    }

    #[test]
    fn test_pass_clears_ko() {
        let mut game = Go::new(9);
        play_all(
            &mut game,
            &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2), (8, 8), (1, 1), (1, 2)],
        );
        game.play(Move::Pass).unwrap();
        assert_eq!(game.ko_point(), None);
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut game = Go::new(9);
        game.play(Move::Pass).unwrap();
        assert!(!game.is_game_over());
        game.play(Move::Pass).unwrap();

        assert!(game.is_game_over());
        // Round was 1 when scored, so only komi counts
        assert_eq!(game.winner(), Some(Winner::White));
        assert_eq!(game.final_score(), Some("Black: 0.0 White: 6.5. White wins."));
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_abstention_not_reset_by_move() {
        let mut game = Go::new(9);
        game.play(Move::Pass).unwrap();
        game.play(Move::place(4, 4)).unwrap();
        assert_eq!(game.abstention(), 1);

        game.play(Move::Pass).unwrap();
        assert_eq!(game.abstention(), 2);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut game = Go::new(9);
        game.play(Move::Pass).unwrap();
        game.play(Move::Pass).unwrap();

        assert_eq!(game.play(Move::place(0, 0)), Err(MoveError::GameOver));
        assert_eq!(game.play(Move::Pass), Err(MoveError::GameOver));
        assert!(game.available_moves().is_empty());
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_scored_game() {
        let mut game = Go::new(5);
        // Black builds a wall on column 1, White on column 3
        play_all(
            &mut game,
            &[(0, 1), (0, 3), (1, 1), (1, 3), (2, 1), (2, 3), (3, 1), (3, 3), (4, 1), (4, 3)],
        );
        // Black fills column 2 except (4,2), White extends along column 4
        play_all(&mut game, &[(0, 2), (0, 4)]);
        // White passes once in between
        game.play(Move::place(1, 2)).unwrap();
        game.play(Move::place(1, 4)).unwrap();
        game.play(Move::place(2, 2)).unwrap();
        game.play(Move::Pass).unwrap();
        game.play(Move::place(3, 2)).unwrap();
        // Second pass (abstention hits 2) ends the game
        game.play(Move::Pass).unwrap();

        assert!(game.is_game_over());
        let score = game.score();
        // Black: 9 stones + column 0 (5); (4,2) touches both colors
        assert_eq!(score.black, 14.0);
        // White: 7 stones + (2,4),(3,4),(4,4) + komi
        assert_eq!(score.white, 16.5);
        assert_eq!(game.winner(), Some(Winner::White));
        assert_eq!(game.final_score(), Some("Black: 14.0 White: 16.5. White wins."));
    }

    #[test]
    fn test_undo_restores_go_fields() {
        let mut game = Go::new(9);
        play_all(
            &mut game,
            &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2), (8, 8), (1, 1)],
        );
        let before = game.state().clone();

        game.play(Move::place(1, 2)).unwrap();
        assert!(game.ko_point().is_some());

        game.undo();
        assert_eq!(game.state(), &before);
        assert_eq!(game.history().len(), game.replay().len());
    }

    #[test]
    fn test_surrender() {
        let mut game = Go::new(9);
        play_all(&mut game, &[(4, 4)]);
        game.surrender();

        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Winner::Black));
        assert_eq!(game.final_score(), None);
    }
}
