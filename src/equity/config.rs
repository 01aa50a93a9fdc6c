//! Configuration for the Monte-Carlo equity estimator.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Controls how many trials an estimate runs and whether they run on rayon.
///
/// More trials lower the variance of an estimate at the cost of decision
/// latency; the count never changes what is being estimated.
///
/// # Example
/// ```
/// use postflop_bot::equity::EquityConfig;
///
/// let config = EquityConfig::default().with_trials(500);
/// assert_eq!(config.num_trials, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Number of simulated deals per estimate.
    pub num_trials: usize,

    /// Spread trials over the rayon thread pool.
    ///
    /// Each trial then gets its own generator seeded from the caller's
    /// source, so a seeded run stays reproducible.
    pub parallel: bool,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            num_trials: 200,
            parallel: false,
        }
    }
}

impl EquityConfig {
    /// Builder method: set the trial count.
    pub fn with_trials(mut self, num_trials: usize) -> Self {
        self.num_trials = num_trials;
        self
    }

    /// Builder method: enable parallel trials.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Zero trials is legal (the estimate is 0.0); this only guards the
        // tie-credit accumulator against overflow.
        if self.num_trials > MAX_TRIALS {
            return Err(ConfigError::OutOfRange {
                name: "num_trials",
                value: self.num_trials as f64,
                min: 0.0,
                max: MAX_TRIALS as f64,
            });
        }
        Ok(())
    }
}

/// Upper bound on trials per estimate.
pub const MAX_TRIALS: usize = 100_000_000;
