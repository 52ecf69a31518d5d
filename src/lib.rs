//! # memory-match
//!
//! Game-state engine for a memory-matching ("concentration") card game.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never draws or reads input. Rendering,
//!    announcements, and prompts go through small traits a host implements.
//!
//! 2. **Deterministic**: Boards come from a seeded RNG and every delay runs
//!    on virtual time, so a whole game replays exactly under test.
//!
//! 3. **Session-Scoped**: Each game gets a `SessionId`. Cards and scheduled
//!    tasks carry it, and anything from an older session is rejected.
//!
//! ## Architecture
//!
//! - **Persistent Board**: `im::Vector` backing, so board snapshots are O(1).
//!
//! - **Task Queue**: clock ticks, mismatch flip-back, and the win
//!   announcement are entries on one virtual-time queue.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, session IDs, game summary
//! - `cards`: Faces, catalog, cards, board, deck building
//! - `rules`: Pair evaluation
//! - `selection`: Face-up card tracking and flip counting
//! - `clock`: Task queue and game clock
//! - `game`: Controller state machine, host traits, prompt loops
//! - `error`: Engine error type

pub mod cards;
pub mod clock;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod selection;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameSummary, SessionId};

pub use crate::cards::{
    build_board, AmountBounds, Board, Card, CardAmount, CardId, FaceCatalog, FaceDefinition,
    FaceId, Visibility,
};

pub use crate::rules::{evaluate, is_match, MatchOutcome};

pub use crate::selection::{Selection, SelectionTracker};

pub use crate::clock::{GameClock, TaskQueue};

pub use crate::game::{
    prompt_card_amount, prompt_restart, BoardView, ClickOutcome, GameController, GamePhase,
    Headless, Notifier, Prompter, RestartDecision,
};

pub use crate::error::{GameError, Result};
