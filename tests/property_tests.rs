//! Property tests over random legal move sequences.

use proptest::prelude::*;

use board_arena::core::{Move, Stone};
use board_arena::games::{Go, Gomoku, Othello};
use board_arena::rules::RulesEngine;

/// Apply `picks` as indices into the current options (placements, then a
/// pass where allowed). Stops when the game ends.
fn drive<G: RulesEngine>(game: &mut G, picks: &[usize]) {
    for &pick in picks {
        if game.is_game_over() {
            break;
        }
        let mut options: Vec<Move> = game.available_moves().into_iter().map(Move::Place).collect();
        if game.allows_pass() || options.is_empty() {
            options.push(Move::Pass);
        }
        let mv = options[pick % options.len()];
        game.play(mv).unwrap();
    }
}

fn undo_is_inverse<G: RulesEngine>(mut game: G, picks: &[usize]) -> Result<(), TestCaseError> {
    let mut snapshots = vec![game.state().clone()];
    for &pick in picks {
        if game.is_game_over() {
            break;
        }
        drive(&mut game, &[pick]);
        snapshots.push(game.state().clone());
    }
    while snapshots.len() > 1 {
        snapshots.pop();
        game.undo();
        prop_assert_eq!(Some(game.state()), snapshots.last());
    }
    prop_assert!(game.history().is_empty());
    Ok(())
}

fn replay_matches<G: RulesEngine>(mut game: G, picks: &[usize]) -> Result<(), TestCaseError> {
    drive(&mut game, picks);
    prop_assert_eq!(game.history().len(), game.replay().len());
    let rebuilt = game.replayed().unwrap();
    prop_assert_eq!(rebuilt.state(), game.state());
    Ok(())
}

proptest! {
    #[test]
    fn prop_go_undo_is_inverse(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        undo_is_inverse(Go::new(5), &picks)?;
    }

    #[test]
    fn prop_gomoku_undo_is_inverse(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        undo_is_inverse(Gomoku::new(7), &picks)?;
    }

    #[test]
    fn prop_othello_undo_is_inverse(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        undo_is_inverse(Othello::new(), &picks)?;
    }

    #[test]
    fn prop_go_replay_matches(picks in prop::collection::vec(any::<usize>(), 0..80)) {
        replay_matches(Go::new(7), &picks)?;
    }

    #[test]
    fn prop_gomoku_replay_matches(picks in prop::collection::vec(any::<usize>(), 0..60)) {
        replay_matches(Gomoku::new(9), &picks)?;
    }

    #[test]
    fn prop_othello_replay_matches(picks in prop::collection::vec(any::<usize>(), 0..70)) {
        replay_matches(Othello::new(), &picks)?;
    }

    /// Each placement adds exactly one stone; flips only recolor.
    #[test]
    fn prop_othello_stone_total_grows(picks in prop::collection::vec(any::<usize>(), 1..60)) {
        let mut game = Othello::new();
        for &pick in &picks {
            if game.is_game_over() {
                break;
            }
            let (black, white) = game.stone_counts();
            let placing = !game.available_moves().is_empty();
            drive(&mut game, &[pick]);
            let (after_black, after_white) = game.stone_counts();
            let expected = if placing { black + white + 1 } else { black + white };
            prop_assert_eq!(after_black + after_white, expected);
            prop_assert!(after_black + after_white <= 64);
        }
    }

    #[test]
    fn prop_turns_alternate(picks in prop::collection::vec(any::<usize>(), 0..30)) {
        let mut game = Go::new(5);
        drive(&mut game, &picks);
        let expected = if game.round() % 2 == 0 { Stone::Black } else { Stone::White };
        prop_assert_eq!(game.cur_player(), expected);
    }
}
