//! Deck building: from a requested card count to a shuffled board.
//!
//! 1. Validate the requested count against the `AmountBounds`.
//! 2. Shuffle a copy of the catalog's faces and keep the first `amount / 2`.
//! 3. Duplicate them so every chosen face appears exactly twice.
//! 4. Fisher–Yates the pairs and deal them into fresh hidden cards.

use log::debug;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::card::{Card, CardId};
use super::catalog::FaceCatalog;
use crate::core::{GameConfig, GameRng, SessionId, MIN_SUPPORTED_CARD_AMOUNT};
use crate::error::{GameError, Result};

/// Inclusive range of card counts a player may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBounds {
    pub min: usize,
    pub max: usize,
}

impl AmountBounds {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Bounds for a configured minimum and a catalog's capacity.
    ///
    /// Fails when the catalog cannot fill even the smallest board.
    pub fn for_catalog(config: &GameConfig, catalog: &FaceCatalog) -> Result<Self> {
        let bounds = Self::new(config.min_card_amount, catalog.max_card_amount());
        if bounds.min > bounds.max {
            return Err(GameError::InvalidConfig(format!(
                "catalog of {} faces cannot fill the minimum of {} cards",
                catalog.len(),
                bounds.min
            )));
        }
        Ok(bounds)
    }

    /// Even and within `[min, max]`.
    #[must_use]
    pub fn accepts(&self, value: i64) -> bool {
        value % 2 == 0 && value >= self.min as i64 && value <= self.max as i64
    }

    fn reject(&self, input: impl Into<String>) -> GameError {
        GameError::InvalidCardAmount {
            input: input.into(),
            min: self.min,
            max: self.max,
        }
    }
}

/// A validated card count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardAmount(usize);

impl CardAmount {
    /// Validate a numeric card count.
    pub fn new(value: i64, bounds: AmountBounds) -> Result<Self> {
        if !bounds.accepts(value) {
            return Err(bounds.reject(value.to_string()));
        }
        Ok(Self(value as usize))
    }

    /// Validate a raw prompt answer.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a plain
    /// integer is rejected rather than partially parsed.
    pub fn parse(input: &str, bounds: AmountBounds) -> Result<Self> {
        let value = input
            .trim()
            .parse::<i64>()
            .map_err(|_| bounds.reject(input))?;
        Self::new(value, bounds)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of distinct faces on the board.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.0 / 2
    }
}

impl std::fmt::Display for CardAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deal a shuffled board of `amount` cards for `session`.
///
/// The catalog itself is not reordered.
pub fn build_board(
    amount: CardAmount,
    catalog: &FaceCatalog,
    session: SessionId,
    rng: &mut GameRng,
) -> Result<Board> {
    if amount.get() > catalog.max_card_amount() {
        return Err(GameError::InvalidCardAmount {
            input: amount.to_string(),
            min: MIN_SUPPORTED_CARD_AMOUNT,
            max: catalog.max_card_amount(),
        });
    }

    let mut faces: Vec<_> = catalog.ids().collect();
    rng.shuffle(&mut faces);
    faces.truncate(amount.pairs());

    let mut deck = Vec::with_capacity(amount.get());
    deck.extend_from_slice(&faces);
    deck.extend_from_slice(&faces);
    rng.shuffle(&mut deck);

    debug!("{session}: dealt {amount} cards from {} faces", faces.len());

    Ok(Board::new(
        session,
        deck.into_iter()
            .enumerate()
            .map(|(position, face)| Card::new(CardId::new(session, position as u32), face)),
    ))
}
