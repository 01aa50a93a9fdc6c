//! Decision policies: the preflop chart and the postflop equity cascade.

pub mod action;
pub mod config;
pub mod postflop;
pub mod preflop;
pub mod random;

pub use action::Action;
pub use config::{PolicyConfig, PreflopConfig, SizingRange};
pub use postflop::PostflopPolicy;
pub use preflop::{ChartAction, HandClass, Position, PreflopChart, PreflopPolicy};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
