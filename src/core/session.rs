//! Session identity and per-session counters.
//!
//! Every game gets a fresh `SessionId`. Cards and scheduled tasks carry the
//! id of the session that created them, which is how stale references from
//! a finished or abandoned game are told apart from live ones.

use serde::{Deserialize, Serialize};

/// Session generation number.
///
/// `SessionId(0)` is the "no game yet" value; the first real session is 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The session that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Final numbers for a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Session the numbers belong to.
    pub session: SessionId,
    /// Cards revealed over the whole game (two per turn).
    pub flips: u32,
    /// Whole seconds counted by the clock.
    pub elapsed_secs: u64,
}

impl GameSummary {
    /// Message shown to the player when the game is won.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "You won in {} moves! The game lasted {} seconds!",
            self.flips, self.elapsed_secs
        )
    }
}
