//! Face definitions - the printed images of the deck.
//!
//! A `FaceDefinition` is the static side of a card: the image that two
//! board slots share. Board slots themselves live in `Card`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a face in a catalog.
///
/// Dense index: the n-th face registered in a catalog has `FaceId(n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this face in its catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Static face definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceDefinition {
    /// Identifier within the owning catalog.
    pub id: FaceId,

    /// Opaque image name (a file name in the standard catalog).
    pub name: String,
}

impl FaceDefinition {
    /// Create a new face definition.
    #[must_use]
    pub fn new(id: FaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
