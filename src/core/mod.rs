//! Core engine types: sessions, RNG, configuration.
//!
//! These are the building blocks shared by every other module. Hosts
//! configure the engine via `GameConfig` rather than modifying the core.

pub mod config;
pub mod rng;
pub mod session;

pub use config::{GameConfig, MIN_SUPPORTED_CARD_AMOUNT};
pub use rng::GameRng;
pub use session::{GameSummary, SessionId};
