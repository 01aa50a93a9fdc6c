//! Bot configuration: one immutable bundle built at startup.
//!
//! Every section has defaults matching the tuned strategy, so an empty JSON
//! object is a valid configuration file.

use crate::equity::EquityConfig;
use crate::policy::{PolicyConfig, PreflopConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// All tunables of the bot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Monte-Carlo estimator settings.
    pub equity: EquityConfig,
    /// Postflop thresholds, probabilities and bet sizes.
    pub policy: PolicyConfig,
    /// Preflop randomization settings.
    pub preflop: PreflopConfig,
    /// Random seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl BotConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.equity.validate()?;
        self.policy.validate()?;
        self.preflop.validate()
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The JSON was malformed or had wrong field types.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A probability outside [0, 1].
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A value outside its allowed range.
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Lowest allowed value.
        min: f64,
        /// Highest allowed value.
        max: f64,
    },
    /// A bet-size range with `min > max` or a negative bound.
    #[error("{name} sizing range [{min}, {max}] is invalid")]
    Sizing {
        /// Field name.
        name: &'static str,
        /// Lower pot fraction.
        min: f64,
        /// Upper pot fraction.
        max: f64,
    },
}

/// Check that `value` is a probability.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = BotConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let json = r#"{
            "equity": { "num_trials": 1000 },
            "policy": { "value_threshold": 0.6 },
            "seed": 42
        }"#;
        let config = BotConfig::from_json_str(json).unwrap();
        assert_eq!(config.equity.num_trials, 1000);
        assert_eq!(config.policy.value_threshold, 0.6);
        assert_eq!(config.policy.multiway_buffer, 0.08);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let json = r#"{ "policy": { "semi_bluff_chance": 1.5 } }"#;
        let err = BotConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Probability { name: "semi_bluff_chance", .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BotConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            BotConfig::from_json_file("/nonexistent/bot.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
