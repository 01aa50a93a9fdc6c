//! Strategy constants for the preflop and postflop policies.

use crate::config::{check_probability, ConfigError};
use serde::{Deserialize, Serialize};

/// A bet size drawn uniformly as a fraction of the pot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRange {
    /// Smallest pot fraction.
    pub min: f64,
    /// Largest pot fraction.
    pub max: f64,
}

impl SizingRange {
    /// Create a sizing range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min < 0.0 || self.min > self.max || !self.max.is_finite() {
            return Err(ConfigError::Sizing {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Thresholds, deviation probabilities and bet sizes of the postflop policy.
///
/// Equity thresholds are raised by `multiway_buffer` once
/// `multiway_players` or more players are active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Equity above which the policy value-bets.
    pub value_threshold: f64,
    /// Added to every equity threshold in multiway pots.
    pub multiway_buffer: f64,
    /// Active players needed for a pot to count as multiway.
    pub multiway_players: usize,

    /// Equity above which a slow-play check is considered.
    pub slow_play_equity: f64,
    /// Probability of slow-playing such a hand.
    pub slow_play_chance: f64,

    /// Equity below which a pure bluff is considered.
    pub bluff_equity: f64,
    /// Probability of bluffing such a hand.
    pub bluff_chance: f64,

    /// Distance from the value threshold that counts as borderline.
    pub borderline_gap: f64,
    /// Probability of inverting a borderline decision.
    pub borderline_chance: f64,

    /// Probability of semi-bluffing a strong draw.
    pub semi_bluff_chance: f64,

    /// Value bet as a fraction of the pot.
    pub value_bet_size: SizingRange,
    /// Bluff bet as a fraction of the pot.
    pub bluff_bet_size: SizingRange,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            value_threshold: 0.55,
            multiway_buffer: 0.08,
            multiway_players: 3,
            slow_play_equity: 0.9,
            slow_play_chance: 0.2,
            bluff_equity: 0.2,
            bluff_chance: 0.1,
            borderline_gap: 0.05,
            borderline_chance: 0.3,
            semi_bluff_chance: 0.4,
            value_bet_size: SizingRange::new(0.6, 0.9),
            bluff_bet_size: SizingRange::new(0.4, 0.6),
        }
    }
}

impl PolicyConfig {
    /// Equity buffer for a pot with `active_players` players.
    pub fn buffer_for(&self, active_players: usize) -> f64 {
        if active_players >= self.multiway_players {
            self.multiway_buffer
        } else {
            0.0
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("value_threshold", self.value_threshold),
            ("multiway_buffer", self.multiway_buffer),
            ("slow_play_equity", self.slow_play_equity),
            ("slow_play_chance", self.slow_play_chance),
            ("bluff_equity", self.bluff_equity),
            ("bluff_chance", self.bluff_chance),
            ("borderline_gap", self.borderline_gap),
            ("borderline_chance", self.borderline_chance),
            ("semi_bluff_chance", self.semi_bluff_chance),
        ] {
            check_probability(name, value)?;
        }
        if self.multiway_players < 2 {
            return Err(ConfigError::OutOfRange {
                name: "multiway_players",
                value: self.multiway_players as f64,
                min: 2.0,
                max: f64::INFINITY,
            });
        }
        self.value_bet_size.validate("value_bet_size")?;
        self.bluff_bet_size.validate("bluff_bet_size")
    }
}

/// Randomization of the preflop chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflopConfig {
    /// Probability of raising a chart call against a small bet.
    pub call_to_raise_chance: f64,
    /// A bet below this fraction of the stack counts as small for calls.
    pub call_to_raise_stack_fraction: f64,
    /// Probability of flatting a chart raise against a small bet.
    pub raise_to_call_chance: f64,
    /// A bet below this fraction of the stack counts as small for raises.
    pub raise_to_call_stack_fraction: f64,
}

impl Default for PreflopConfig {
    fn default() -> Self {
        Self {
            call_to_raise_chance: 0.2,
            call_to_raise_stack_fraction: 0.05,
            raise_to_call_chance: 0.15,
            raise_to_call_stack_fraction: 0.1,
        }
    }
}

impl PreflopConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("call_to_raise_chance", self.call_to_raise_chance)?;
        check_probability("call_to_raise_stack_fraction", self.call_to_raise_stack_fraction)?;
        check_probability("raise_to_call_chance", self.raise_to_call_chance)?;
        check_probability("raise_to_call_stack_fraction", self.raise_to_call_stack_fraction)
    }
}
