//! The board: the ordered card slots of one session.
//!
//! Backed by `im::Vector` so hosts can take snapshots of the board in O(1)
//! and keep them around while play continues.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Visibility};
use super::face::FaceId;
use crate::core::SessionId;
use crate::error::{GameError, Result};

/// Ordered card slots for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    session: SessionId,
    cards: Vector<Card>,
}

impl Board {
    /// Create a board from cards dealt in `session`.
    #[must_use]
    pub fn new(session: SessionId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            session,
            cards: cards.into_iter().collect(),
        }
    }

    /// Session this board belongs to.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card, rejecting references from other sessions.
    pub fn card(&self, id: CardId) -> Result<&Card> {
        if id.session != self.session {
            return Err(GameError::StaleCardReference(id));
        }
        self.cards.get(id.index()).ok_or(GameError::UnknownCard(id))
    }

    /// Mutable lookup with the same checks as [`Board::card`].
    pub fn card_mut(&mut self, id: CardId) -> Result<&mut Card> {
        if id.session != self.session {
            return Err(GameError::StaleCardReference(id));
        }
        self.cards
            .get_mut(id.index())
            .ok_or(GameError::UnknownCard(id))
    }

    /// Card at a board position in the current session.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Set a card's visibility.
    pub fn set_visibility(&mut self, id: CardId, visibility: Visibility) -> Result<()> {
        self.card_mut(id)?.visibility = visibility;
        Ok(())
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Faces in board order.
    #[must_use]
    pub fn faces(&self) -> Vec<FaceId> {
        self.cards.iter().map(|card| card.face).collect()
    }

    /// Number of cards in the given state.
    #[must_use]
    pub fn count(&self, visibility: Visibility) -> usize {
        self.cards
            .iter()
            .filter(|card| card.visibility == visibility)
            .count()
    }

    /// True once every card on a non-empty board is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }
}
