//! Selection tracking for the cards of the current turn.
//!
//! The tracker owns the pending list and the flip counter; the cards
//! themselves stay on the `Board` and are updated in place.
//!
//! ## Invariant
//!
//! At most one card is pending after any call returns. The second card of
//! a turn completes a `Selection::Pair`, which leaves the pending list
//! immediately; the caller then judges the pair and calls
//! [`SelectionTracker::resolve_pair`].

use log::debug;
use smallvec::SmallVec;

use crate::cards::{Board, CardId, Visibility};
use crate::error::{GameError, Result};
use crate::rules::MatchOutcome;

/// What a successful selection produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// First card of the turn; waiting for a second.
    First(CardId),
    /// Second card of the turn, paired with the earlier one.
    Pair { first: CardId, second: CardId },
}

/// Tracks face-up, unresolved cards and counts flips.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    pending: SmallVec<[CardId; 2]>,
    flips: u32,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal a hidden card.
    ///
    /// Fails without side effects if the card is not `Hidden` or does not
    /// belong to the board.
    pub fn select(&mut self, board: &mut Board, id: CardId) -> Result<Selection> {
        let card = board.card_mut(id)?;
        if !card.is_selectable() {
            return Err(GameError::CardNotSelectable {
                id,
                visibility: card.visibility,
            });
        }

        card.visibility = Visibility::Revealed;
        self.flips += 1;
        self.pending.push(id);

        if self.pending.len() < 2 {
            return Ok(Selection::First(id));
        }

        let second = self.pending.pop().unwrap_or(id);
        let first = self.pending.pop().unwrap_or(id);
        Ok(Selection::Pair { first, second })
    }

    /// Settle a pair that left the pending list.
    ///
    /// Matches become `Matched`; mismatches become `Resolving` until
    /// [`SelectionTracker::flip_back`] runs.
    pub fn resolve_pair(
        &mut self,
        board: &mut Board,
        first: CardId,
        second: CardId,
        outcome: MatchOutcome,
    ) -> Result<()> {
        // Validate both before touching either.
        board.card(first)?;
        board.card(second)?;

        let visibility = match outcome {
            MatchOutcome::Matched => Visibility::Matched,
            MatchOutcome::Mismatched => Visibility::Resolving,
        };
        board.set_visibility(first, visibility)?;
        board.set_visibility(second, visibility)?;
        self.pending.retain(|id| *id != first && *id != second);

        debug!("{first} + {second}: {outcome:?}");
        Ok(())
    }

    /// Turn a mismatched pair face-down again.
    ///
    /// Only cards still `Resolving` are touched. Returns the cards that
    /// flipped back.
    pub fn flip_back(
        &mut self,
        board: &mut Board,
        first: CardId,
        second: CardId,
    ) -> Result<SmallVec<[CardId; 2]>> {
        let mut flipped = SmallVec::new();
        for id in [first, second] {
            let card = board.card_mut(id)?;
            if card.visibility == Visibility::Resolving {
                card.visibility = Visibility::Hidden;
                flipped.push(id);
            }
        }
        Ok(flipped)
    }

    /// 0 between turns, 1 while waiting for the second card.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// The card waiting for a partner, if any.
    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.pending.last().copied()
    }

    /// Cards revealed since the last reset. Never decreases.
    #[must_use]
    pub fn flips(&self) -> u32 {
        self.flips
    }

    /// Forget everything for a new session.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.flips = 0;
    }
}
