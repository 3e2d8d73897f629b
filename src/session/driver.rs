use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameKind, GameRng, Move, PersistError, Stone, Winner};
use crate::rules::{Identities, RulesEngine};
use crate::strategy::{self, AiTier, Evaluate, Human, Strategy};

/// Receives the outcome for each identified participant.
pub trait RecordSink {
    fn record(&mut self, identity: &str, kind: GameKind, won: bool);
}

/// One reported outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub identity: String,
    /// Lowercase game key, e.g. "gomoku".
    pub game: String,
    pub won: bool,
}

impl RecordSink for Vec<GameRecord> {
    fn record(&mut self, identity: &str, kind: GameKind, won: bool) {
        self.push(GameRecord {
            identity: identity.to_string(),
            game: kind.key().to_string(),
            won,
        });
    }
}

/// A seat at the board.
pub struct Participant<G> {
    strategy: Box<dyn Strategy<G>>,
    identity: Option<String>,
}

impl<G: RulesEngine> Participant<G> {
    /// A seat driven by `strategy`.
    ///
    /// `identity` is `None` for guests and AIs; only identified seats are
    /// reported to the record sink.
    #[must_use]
    pub fn new(strategy: Box<dyn Strategy<G>>, identity: Option<String>) -> Self {
        Self { strategy, identity }
    }

    #[must_use]
    pub fn human(color: Stone, identity: Option<String>) -> Self
    where
        G: 'static,
    {
        Self::new(Box::new(Human::new(color)), identity)
    }

    #[must_use]
    pub fn ai(tier: AiTier, color: Stone, rng: GameRng) -> Self
    where
        G: Evaluate + 'static,
    {
        Self::new(strategy::ai(tier, color, rng), None)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.strategy.is_human()
    }

    #[must_use]
    pub fn color(&self) -> Stone {
        self.strategy.color()
    }
}

impl<G> std::fmt::Debug for Participant<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// One game between two seats.
pub struct Match<G: RulesEngine, R: RecordSink> {
    game: G,
    black: Participant<G>,
    white: Participant<G>,
    sink: R,
    reported: bool,
}

impl<G: RulesEngine, R: RecordSink> Match<G, R> {
    #[must_use]
    pub fn new(game: G, black: Participant<G>, white: Participant<G>, sink: R) -> Self {
        let reported = game.is_game_over();
        Self {
            game,
            black,
            white,
            sink,
            reported,
        }
    }

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    #[must_use]
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Outcome so far.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.game.winner()
    }

    /// Seat for a color.
    #[must_use]
    pub fn seat(&self, color: Stone) -> &Participant<G> {
        match color {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    /// Identity pair for save files, when both seats have one.
    #[must_use]
    pub fn identities(&self) -> Option<Identities> {
        match (self.black.identity(), self.white.identity()) {
            (Some(black), Some(white)) => Some(Identities::new(black, white)),
            _ => None,
        }
    }

    /// Buffer a move for the seat to move.
    ///
    /// Returns `false` when that seat does not take outside input.
    pub fn submit(&mut self, mv: Move) -> bool {
        let seat = match self.game.cur_player() {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        };
        seat.strategy.submit(mv)
    }

    /// Ask the seat to move and apply its answer.
    ///
    /// Returns `true` when the game advanced. A seat with no decision yet or
    /// a rejected move leaves everything as it was.
    pub fn play_round(&mut self) -> bool {
        if self.game.is_game_over() {
            return false;
        }
        let color = self.game.cur_player();
        let seat = match color {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        };
        let Some(mv) = seat.strategy.make_move(&self.game) else {
            return false;
        };
        let advanced = self.game.play(mv).is_ok();
        if !advanced {
            debug!(%color, %mv, "seat move not applied");
        }
        self.report_if_over();
        advanced
    }

    /// Play rounds until the game ends, a seat waits for input, or
    /// `max_rounds` rounds have been attempted.
    ///
    /// Returns the number of rounds that advanced the game.
    pub fn run_to_end(&mut self, max_rounds: usize) -> usize {
        let mut played = 0;
        for _ in 0..max_rounds {
            if !self.play_round() {
                break;
            }
            played += 1;
        }
        played
    }

    /// Take back the last move.
    ///
    /// An outcome already reported stays reported, even if the game is
    /// finished again afterwards.
    pub fn undo(&mut self) {
        self.game.undo();
    }

    /// Start over. The next finish is reported again.
    pub fn restart(&mut self) {
        self.game.restart();
        self.reported = false;
    }

    /// The seat to move gives up.
    pub fn surrender(&mut self) {
        self.game.surrender();
        self.report_if_over();
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        self.game.save(path, self.identities().as_ref())
    }

    /// Load a saved game for these seats.
    ///
    /// Returns `Ok(false)` when the file belongs to other identities.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<bool, PersistError> {
        let identities = self.identities();
        let loaded = self.game.load(path, identities.as_ref())?;
        if loaded {
            self.reported = self.game.is_game_over();
        }
        Ok(loaded)
    }

    fn report_if_over(&mut self) {
        if self.reported || !self.game.is_game_over() {
            return;
        }
        self.reported = true;

        let kind = self.game.kind();
        let winner = self.game.winner();
        info!(%kind, ?winner, "game over");
        for (color, seat) in [(Stone::Black, &self.black), (Stone::White, &self.white)] {
            if let Some(identity) = seat.identity.as_deref() {
                let won = winner.is_some_and(|w| w.is_winner(color));
                self.sink.record(identity, kind, won);
            }
        }
    }
}

impl<G: Evaluate + 'static, R: RecordSink> Match<G, R> {
    /// Two AI seats, each with its own RNG forked from the game's seed.
    #[must_use]
    pub fn ai_vs_ai(game: G, black: AiTier, white: AiTier, sink: R) -> Self {
        let mut rng = GameRng::new(game.config().seed);
        let black = Participant::ai(black, Stone::Black, rng.fork());
        let white = Participant::ai(white, Stone::White, rng.fork());
        Self::new(game, black, white, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Gomoku;

    #[test]
    fn test_vec_sink_uses_game_key() {
        let mut sink: Vec<GameRecord> = Vec::new();
        sink.record("alice", GameKind::Othello, true);
        assert_eq!(
            sink,
            vec![GameRecord {
                identity: "alice".to_string(),
                game: "othello".to_string(),
                won: true,
            }]
        );
    }

    #[test]
    fn test_human_seat_waits_for_input() {
        let mut session = Match::new(
            Gomoku::new(9),
            Participant::human(Stone::Black, Some("alice".to_string())),
            Participant::human(Stone::White, None),
            Vec::<GameRecord>::new(),
        );

        assert!(!session.play_round());
        assert!(session.submit(Move::place(4, 4)));
        assert!(session.play_round());
        assert_eq!(session.game().round(), 1);
        assert!(session.identities().is_none());
    }

    #[test]
    fn test_ai_seat_ignores_submit() {
        let mut session = Match::ai_vs_ai(Gomoku::new(9), AiTier::Random, AiTier::Random, Vec::<GameRecord>::new());
        assert!(!session.submit(Move::place(0, 0)));
        assert!(!session.seat(Stone::Black).is_human());
        assert_eq!(session.seat(Stone::White).color(), Stone::White);
    }
}
