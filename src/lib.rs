//! # Postflop Bot
//!
//! A poker agent for multi-player No-Limit Texas Hold'em. Preflop it plays
//! from static 6-max charts; postflop it estimates hand equity by Monte-Carlo
//! simulation and runs a randomized rule cascade over equity, pot odds and
//! draw strength.
//!
//! ## Features
//!
//! - **Monte-Carlo Equity**: Uniform-random opponents, split pots credited fractionally
//! - **Parallel Trials**: Optional rayon fan-out with order-independent aggregation
//! - **Draw Classifier**: Flush and open straight draw heuristics
//! - **Randomized Policy**: Slow-plays, bluffs and semi-bluffs from one seedable source
//! - **JSON Configuration**: Every threshold and probability is tunable
//!
//! ## Quick Start
//!
//! ```no_run
//! use postflop_bot::{Bot, BotConfig, PokerBot, RoundState};
//!
//! let mut bot = PokerBot::from_config(1, BotConfig::default().with_seed(42)).unwrap();
//! let round: RoundState = serde_json::from_str(r#"{
//!     "community_cards": ["2c", "7d", "Ts"],
//!     "pot": 300, "current_bet": 100, "min_raise": 200,
//!     "player_bets": { "1": 0, "2": 100 }
//! }"#).unwrap();
//! bot.set_hole("AhAd".parse::<postflop_bot::HoleCards>().unwrap().cards().to_vec());
//! let action = bot.get_action(&round, 1000).unwrap();
//! println!("{}", action);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  PokerBot (Bot lifecycle)                │
//! │  - RoundState -> HandState     - preflop / postflop      │
//! └──────────────────────────────────────────────────────────┘
//!                │                             │
//!                ▼                             ▼
//!        ┌───────────────┐          ┌────────────────────┐
//!        │ PreflopPolicy │          │   PostflopPolicy   │
//!        │ 6-max charts  │          │   rule cascade     │
//!        └───────────────┘          └────────────────────┘
//!                                      │            │
//!                                      ▼            ▼
//!                            ┌─────────────────┐ ┌────────────┐
//!                            │ EquityEstimator │ │   draws    │
//!                            └─────────────────┘ └────────────┘
//!                                      │
//!                                      ▼
//!                            ┌─────────────────┐
//!                            │  HandEvaluator  │
//!                            └─────────────────┘
//! ```

#![warn(missing_docs)]

/// Cards, hole cards, boards, decks, hand evaluation and draw detection.
pub mod cards;

/// Monte-Carlo equity estimation.
pub mod equity;

/// Preflop and postflop decision policies.
pub mod policy;

/// Round-state messages and the per-decision hand view.
pub mod state;

/// Configuration bundle and its errors.
pub mod config;

/// Game lifecycle hooks and the bot itself.
pub mod bot;

// Re-export commonly used types at crate root for convenience
pub use bot::{Bot, BotError, GameEnd, GameStart, PokerBot};
pub use cards::{Board, Card, Deck, HandEvaluator, HandRank, HoleCards};
pub use config::{BotConfig, ConfigError};
pub use equity::{EquityConfig, EquityError, EquityEstimator};
pub use policy::{Action, PolicyConfig, PostflopPolicy, PreflopPolicy, RandomSource, SeededRandom};
pub use state::{HandState, RoundState};
