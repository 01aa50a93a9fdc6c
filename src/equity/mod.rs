//! Monte-Carlo hand equity.
//!
//! Each estimate removes the known cards from a fresh deck, then repeatedly
//! shuffles the remainder, completes the board, deals two cards to every
//! opponent and scores the showdown. Outright wins count 1, a `k`-way split
//! counts `1/k`.

mod config;
mod estimator;

pub use config::{EquityConfig, MAX_TRIALS};
pub use estimator::{EquityError, EquityEstimator, TrialTally, TIE_UNITS};
