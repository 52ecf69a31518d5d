//! Game orchestration: the controller state machine and its host seams.
//!
//! ## Key Types
//!
//! - `GameController`: owns sessions, turns, the clock, and the end of the game
//! - `BoardView` / `Notifier` / `Prompter`: what a host provides
//! - `prompt_card_amount` / `prompt_restart`: retrying prompt loops

pub mod collaborators;
pub mod controller;
pub mod driver;

pub use collaborators::{BoardView, Headless, Notifier, Prompter};
pub use controller::{ClickOutcome, GameController, GamePhase, RestartDecision};
pub use driver::{prompt_card_amount, prompt_restart};
