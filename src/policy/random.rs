//! Randomness sources for the policy and the equity simulation.
//!
//! Every random decision in the bot goes through [`RandomSource`], so a game
//! can run on entropy while tests replay a fixed seed or script the draws.

use crate::cards::Card;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of uniform draws and shuffles.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Raw 64-bit draw, used to seed per-trial generators.
    fn next_u64(&mut self) -> u64;

    /// Shuffle cards in place.
    fn shuffle_cards(&mut self, cards: &mut [Card]);

    /// Uniform draw in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        (**self).shuffle_cards(cards)
    }
}

/// `StdRng`-backed source; seeded for replays, entropy otherwise.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: StdRng,
}

impl SeededRandom {
    /// Deterministic source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// `from_seed` when a seed is configured, else `from_entropy`.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.gen::<u64>()
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.inner);
    }
}

/// Replays a fixed list of `next_f64` values, cycling when exhausted.
///
/// Shuffles still come from a seeded generator so equity simulation keeps
/// working; only the policy's coin flips are scripted.
/// `ScriptedRandom::never()` returns 1.0 forever, which disables every
/// probabilistic branch of the policy.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
    shuffler: StdRng,
}

impl ScriptedRandom {
    /// Replay `values` in order.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: 0,
            shuffler: StdRng::seed_from_u64(0),
        }
    }

    /// Every draw is 1.0.
    pub fn never() -> Self {
        Self::new(vec![1.0])
    }

    /// Every draw is 0.0.
    pub fn always() -> Self {
        Self::new(vec![0.0])
    }

    /// Number of `next_f64` calls served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = match self.values.len() {
            0 => 1.0,
            n => self.values[self.cursor % n],
        };
        self.cursor += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        self.shuffler.gen::<u64>()
    }

    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.shuffler);
    }
}
