//! Board cards - runtime slot state.
//!
//! A `Card` is one slot on the board of a specific session. It tracks which
//! face it shows and how far it has progressed through its lifecycle:
//!
//! ```text
//! Hidden ──select──▶ Revealed ──match──▶ Matched
//!   ▲                   │
//!   │                mismatch
//!   │                   ▼
//!   └──flip-back──── Resolving
//! ```

use serde::{Deserialize, Serialize};

use super::face::FaceId;
use crate::core::SessionId;

/// Identity of a board slot.
///
/// Includes the session so a reference held past a restart can be detected
/// instead of silently pointing at a slot on the new board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId {
    /// Session the card was dealt in.
    pub session: SessionId,
    /// Position on the board, 0-based.
    pub position: u32,
}

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(session: SessionId, position: u32) -> Self {
        Self { session, position }
    }

    /// Position as an index into the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.position as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({}:{})", self.session.raw(), self.position)
    }
}

/// Visibility state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Face-down and clickable.
    #[default]
    Hidden,
    /// Face-up, waiting for the second card of the turn.
    Revealed,
    /// Face-up after a mismatch, waiting to flip back.
    Resolving,
    /// Face-up for the rest of the game.
    Matched,
}

impl Visibility {
    /// Is the face showing?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Visibility::Hidden => "hidden",
            Visibility::Revealed => "revealed",
            Visibility::Resolving => "resolving",
            Visibility::Matched => "matched",
        };
        f.write_str(name)
    }
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Slot identity.
    pub id: CardId,

    /// Face printed on this card.
    pub face: FaceId,

    /// Current visibility.
    pub visibility: Visibility,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, face: FaceId) -> Self {
        Self {
            id,
            face,
            visibility: Visibility::Hidden,
        }
    }

    /// Only hidden cards take clicks.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.visibility == Visibility::Matched
    }
}
