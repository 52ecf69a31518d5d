//! Error types for the engine.
//!
//! Nothing here is fatal during normal play. Rejected prompt answers are
//! recovered by asking again, and stale references from a superseded
//! session are dropped by the controller before they reach the caller.

use thiserror::Error;

use crate::cards::{CardId, Visibility};
use crate::game::GamePhase;

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Card count is odd, out of range, or not a number.
    #[error("invalid card amount {input:?}: expected an even number between {min} and {max}")]
    InvalidCardAmount {
        input: String,
        min: usize,
        max: usize,
    },

    /// Restart answer is neither of the accepted literals.
    #[error("invalid restart response {0:?}")]
    InvalidRestartResponse(String),

    /// Card belongs to a session that has since been replaced.
    #[error("{0} belongs to a superseded session")]
    StaleCardReference(CardId),

    /// Card position is not on the current board.
    #[error("{0} is not on the board")]
    UnknownCard(CardId),

    /// Board position cannot exist on any board.
    #[error("position {0} is not on the board")]
    UnknownPosition(usize),

    /// Only hidden cards can be selected.
    #[error("{id} cannot be selected while {visibility}")]
    CardNotSelectable { id: CardId, visibility: Visibility },

    /// Face catalog entries must be unique.
    #[error("duplicate face {0:?} in catalog")]
    DuplicateFace(String),

    /// Face catalog has no entries.
    #[error("face catalog is empty")]
    EmptyCatalog,

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Operation is not available in the current phase.
    #[error("{operation} is not allowed while {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: GamePhase,
    },

    /// Prompt collaborator stopped answering.
    #[error("prompt closed before a valid answer was given")]
    PromptClosed,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionId;

    #[test]
    fn test_invalid_amount_message() {
        let err = GameError::InvalidCardAmount {
            input: "5".to_string(),
            min: 4,
            max: 14,
        };
        assert_eq!(
            err.to_string(),
            "invalid card amount \"5\": expected an even number between 4 and 14"
        );
    }

    #[test]
    fn test_card_messages() {
        let id = CardId::new(SessionId::new(2), 3);
        assert_eq!(
            GameError::StaleCardReference(id).to_string(),
            "Card(2:3) belongs to a superseded session"
        );
        assert_eq!(
            GameError::CardNotSelectable {
                id,
                visibility: Visibility::Matched
            }
            .to_string(),
            "Card(2:3) cannot be selected while matched"
        );
    }

    #[test]
    fn test_wrong_phase_message() {
        let err = GameError::WrongPhase {
            operation: "restart",
            phase: GamePhase::Playing,
        };
        assert_eq!(err.to_string(), "restart is not allowed while playing");
    }
}
