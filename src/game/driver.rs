//! Prompt loops on top of the controller's submit methods.
//!
//! The controller only validates one answer at a time. These helpers keep
//! asking a [`Prompter`] until an answer is accepted or the input closes.

use log::warn;

use super::collaborators::{BoardView, Notifier, Prompter};
use super::controller::{GameController, RestartDecision};
use crate::cards::CardAmount;
use crate::error::{GameError, Result};

/// Ask for a card count until a valid one starts a game.
///
/// Requests a start first, so this works from `NotStarted` and from
/// `AwaitingCardCount` (after a restart).
pub fn prompt_card_amount<U, P>(
    controller: &mut GameController<U>,
    prompter: &mut P,
) -> Result<CardAmount>
where
    U: BoardView + Notifier,
    P: Prompter + ?Sized,
{
    controller.request_start()?;
    let prompt = controller.card_amount_prompt();

    loop {
        let answer = prompter.ask_integer(&prompt).ok_or(GameError::PromptClosed)?;
        match controller.submit_card_amount(&answer) {
            Ok(amount) => return Ok(amount),
            Err(err @ GameError::InvalidCardAmount { .. }) => warn!("{err}"),
            Err(err) => return Err(err),
        }
    }
}

/// Ask whether to play again until one of the accepted answers is given.
pub fn prompt_restart<U, P>(
    controller: &mut GameController<U>,
    prompter: &mut P,
) -> Result<RestartDecision>
where
    U: BoardView + Notifier,
    P: Prompter + ?Sized,
{
    let prompt = controller.restart_prompt();

    loop {
        let answer = prompter.ask_yes_no(&prompt).ok_or(GameError::PromptClosed)?;
        match controller.submit_restart(&answer) {
            Ok(decision) => return Ok(decision),
            Err(err @ GameError::InvalidRestartResponse(_)) => warn!("{err}"),
            Err(err) => return Err(err),
        }
    }
}
