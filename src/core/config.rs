//! Game configuration.
//!
//! Hosts configure the engine at startup with a `GameConfig`:
//! - the smallest card count a player may ask for
//! - the delays for mismatch flip-back and win announcement
//! - the clock tick interval
//! - the literal answers accepted by the restart prompt
//!
//! The upper card bound is not configured; it always follows the face
//! catalog (two cards per face).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Smallest card count the engine will ever accept.
pub const MIN_SUPPORTED_CARD_AMOUNT: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum card count (even, at least 2).
    pub min_card_amount: usize,

    /// How long a mismatched pair stays face-up (milliseconds).
    pub mismatch_delay_ms: u64,

    /// Pause between the final match and the win announcement (milliseconds).
    /// Lets the last reveal render before the message appears.
    pub win_delay_ms: u64,

    /// Clock tick interval (milliseconds).
    pub tick_interval_ms: u64,

    /// Restart answer that starts a new game.
    pub affirmative: String,

    /// Restart answer that ends play.
    pub negative: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_card_amount: 4,
            mismatch_delay_ms: 1000,
            win_delay_ms: 700,
            tick_interval_ms: 1000,
            affirmative: "yes".to_string(),
            negative: "no".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum card count.
    #[must_use]
    pub fn with_min_card_amount(mut self, min: usize) -> Self {
        self.min_card_amount = min;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the win announcement delay.
    #[must_use]
    pub fn with_win_delay_ms(mut self, ms: u64) -> Self {
        self.win_delay_ms = ms;
        self
    }

    /// Set the clock tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the accepted restart answers.
    #[must_use]
    pub fn with_restart_answers(
        mut self,
        affirmative: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        self.affirmative = affirmative.into();
        self.negative = negative.into();
        self
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.min_card_amount < MIN_SUPPORTED_CARD_AMOUNT || self.min_card_amount % 2 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "min_card_amount must be even and at least {MIN_SUPPORTED_CARD_AMOUNT} (got {})",
                self.min_card_amount
            )));
        }
        if self.mismatch_delay_ms == 0 || self.win_delay_ms == 0 {
            return Err(GameError::InvalidConfig(
                "delays must be greater than zero".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        let affirmative = self.affirmative.trim();
        let negative = self.negative.trim();
        if affirmative.is_empty() || negative.is_empty() {
            return Err(GameError::InvalidConfig(
                "restart answers must not be empty".to_string(),
            ));
        }
        if affirmative == negative {
            return Err(GameError::InvalidConfig(format!(
                "restart answers must differ (both {affirmative:?})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_card_amount, 4);
        assert_eq!(config.mismatch_delay(), Duration::from_millis(1000));
        assert_eq!(config.win_delay(), Duration::from_millis(700));
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_min_card_amount(2)
            .with_mismatch_delay_ms(500)
            .with_win_delay_ms(100)
            .with_restart_answers("sim", "não");

        assert_eq!(config.min_card_amount, 2);
        assert_eq!(config.mismatch_delay_ms, 500);
        assert_eq!(config.win_delay_ms, 100);
        assert_eq!(config.affirmative, "sim");
        assert_eq!(config.negative, "não");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_odd_or_tiny_minimum_rejected() {
        assert!(GameConfig::new().with_min_card_amount(3).validate().is_err());
        assert!(GameConfig::new().with_min_card_amount(0).validate().is_err());
    }

    #[test]
    fn test_zero_timings_rejected() {
        assert!(GameConfig::new().with_mismatch_delay_ms(0).validate().is_err());
        assert!(GameConfig::new().with_win_delay_ms(0).validate().is_err());
        assert!(GameConfig::new().with_tick_interval_ms(0).validate().is_err());
    }

    #[test]
    fn test_restart_answers_must_differ() {
        let err = GameConfig::new()
            .with_restart_answers("y", " y ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(GameConfig::new().with_restart_answers("", "no").validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"min_card_amount": 6}"#).unwrap();
        assert_eq!(config.min_card_amount, 6);
        assert_eq!(config.mismatch_delay_ms, 1000);
        assert_eq!(config.affirmative, "yes");
    }
}
