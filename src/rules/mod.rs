//! Game rules: how the two cards of a turn are judged.

pub mod evaluator;

pub use evaluator::{evaluate, is_match, MatchOutcome};
