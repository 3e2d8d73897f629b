//! Match driver.
//!
//! A `Match` owns one game and two seats. Each round it asks the seat to
//! move for its strategy, applies the answer, and once the game is over it
//! reports the outcome for every seat with an identity exactly once.

mod driver;

pub use driver::{GameRecord, Match, Participant, RecordSink};
