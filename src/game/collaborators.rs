//! Collaborator traits: what the engine needs from its host.
//!
//! The engine never draws anything or reads input itself. A host supplies:
//!
//! - `BoardView`: renders cards, counters, and flips
//! - `Notifier`: shows the end-of-game message
//! - `Prompter`: asks the player for a card count or a restart answer
//!
//! Clicks travel the other way: the host calls
//! [`GameController::on_card_clicked`](super::GameController::on_card_clicked)
//! with the clicked card's `CardId`.

use crate::cards::{Card, CardId, FaceDefinition};

/// Rendering side of the board.
pub trait BoardView {
    /// Remove every card element.
    fn clear_board(&mut self);

    /// Create the element for a freshly dealt card and append it to the board.
    ///
    /// Called once per card, in board order.
    fn create_card(&mut self, card: &Card, face: &FaceDefinition, image_path: &str);

    /// Show the flip count.
    fn set_flip_counter(&mut self, flips: u32);

    /// Show the elapsed seconds.
    fn set_timer(&mut self, elapsed_secs: u64);

    /// Turn a card face-up.
    fn flip(&mut self, card: CardId);

    /// Turn a card face-down.
    fn unflip(&mut self, card: CardId);

    /// A card joined a matched pair. Face-up already; defaults to a no-op.
    fn mark_matched(&mut self, _card: CardId) {}
}

/// Acknowledgement-style message to the player.
pub trait Notifier {
    fn announce(&mut self, message: &str);
}

/// Source of player answers.
///
/// Replies are returned raw; validation belongs to the controller.
/// `None` means the input is closed and no answer will ever come.
pub trait Prompter {
    /// Ask for a number (the card count).
    fn ask_integer(&mut self, prompt: &str) -> Option<String>;

    /// Ask a yes/no question (the restart decision).
    fn ask_yes_no(&mut self, prompt: &str) -> Option<String>;
}

/// View and notifier that discard everything.
///
/// Useful for simulations and for driving the engine from tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl BoardView for Headless {
    fn clear_board(&mut self) {}
    fn create_card(&mut self, _card: &Card, _face: &FaceDefinition, _image_path: &str) {}
    fn set_flip_counter(&mut self, _flips: u32) {}
    fn set_timer(&mut self, _elapsed_secs: u64) {}
    fn flip(&mut self, _card: CardId) {}
    fn unflip(&mut self, _card: CardId) {}
}

impl Notifier for Headless {
    fn announce(&mut self, _message: &str) {}
}
