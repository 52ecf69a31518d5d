//! Match evaluation.
//!
//! Two cards match when they show the same face. Nothing else about the
//! cards (position, visibility) takes part in the comparison.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Result of comparing the two cards of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Same face: both cards stay up.
    Matched,
    /// Different faces: both cards flip back after the delay.
    Mismatched,
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == MatchOutcome::Matched
    }
}

/// Do the two cards show the same face?
///
/// Comparing a card with itself is a caller error.
#[must_use]
pub fn is_match(a: &Card, b: &Card) -> bool {
    debug_assert_ne!(a.id, b.id, "a card cannot be paired with itself");
    a.face == b.face
}

/// [`is_match`] as a `MatchOutcome`.
#[must_use]
pub fn evaluate(a: &Card, b: &Card) -> MatchOutcome {
    if is_match(a, b) {
        MatchOutcome::Matched
    } else {
        MatchOutcome::Mismatched
    }
}
