//! Monte-Carlo equity against uniformly random opponent hands.

use super::config::EquityConfig;
use crate::cards::{Card, Deck, HandEvaluator, HoleCards};
use crate::policy::random::{RandomSource, SeededRandom};
use rayon::prelude::*;
use thiserror::Error;

/// Tie credit is counted in these units: the value is divisible by every
/// possible number of tied hands (1..=23), so split credit stays an integer.
pub const TIE_UNITS: u64 = 5_354_228_880;

/// Errors from an equity estimate. All are configuration errors; none is
/// recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// The deck cannot supply the board and every opponent disjointly.
    #[error("deck exhausted: need {needed} cards, only {available} remain")]
    DeckExhausted {
        /// Cards required per trial.
        needed: usize,
        /// Cards left after removing known cards.
        available: usize,
    },
    /// A known card was given twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// Board has more than five cards.
    #[error("board has {0} cards (at most 5)")]
    InvalidBoard(usize),
}

/// Aggregated trial outcomes. Merging is associative and commutative, so
/// parallel and sequential runs sum identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialTally {
    /// Trials simulated.
    pub trials: u64,
    /// Trials won outright.
    pub wins: u64,
    /// Split-pot credit in [`TIE_UNITS`] per whole win.
    pub tie_units: u64,
}

impl TrialTally {
    fn merge(self, other: Self) -> Self {
        Self {
            trials: self.trials + other.trials,
            wins: self.wins + other.wins,
            tie_units: self.tie_units + other.tie_units,
        }
    }

    /// `(wins + tie credit) / trials`, or 0.0 with no trials.
    pub fn equity(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let credit = self.wins as f64 + self.tie_units as f64 / TIE_UNITS as f64;
        credit / self.trials as f64
    }
}

/// Estimates the agent's share of the pot by dealing out random runouts.
#[derive(Debug, Clone, Default)]
pub struct EquityEstimator {
    config: EquityConfig,
    evaluator: HandEvaluator,
}

impl EquityEstimator {
    /// Create an estimator.
    pub fn new(config: EquityConfig) -> Self {
        Self {
            config,
            evaluator: HandEvaluator::new(),
        }
    }

    /// Equity in [0, 1] of `hole` on `board` against `num_opponents` random
    /// hands. Zero opponents is treated as one.
    pub fn estimate<R: RandomSource + ?Sized>(
        &self,
        hole: &HoleCards,
        board: &[Card],
        num_opponents: usize,
        rng: &mut R,
    ) -> Result<f64, EquityError> {
        let tally = self.simulate(hole, board, num_opponents, rng)?;
        Ok(tally.equity())
    }

    /// Run the configured number of trials and return the raw tally.
    pub fn simulate<R: RandomSource + ?Sized>(
        &self,
        hole: &HoleCards,
        board: &[Card],
        num_opponents: usize,
        rng: &mut R,
    ) -> Result<TrialTally, EquityError> {
        let opponents = num_opponents.max(1);
        if board.len() > 5 {
            return Err(EquityError::InvalidBoard(board.len()));
        }

        let mut known: Vec<Card> = Vec::with_capacity(7);
        for card in hole.cards().into_iter().chain(board.iter().copied()) {
            if known.contains(&card) {
                return Err(EquityError::DuplicateCard(card));
            }
            known.push(card);
        }

        let deck = Deck::without(&known);
        let needed = (5 - board.len()) + 2 * opponents;
        if deck.remaining() < needed {
            return Err(EquityError::DeckExhausted {
                needed,
                available: deck.remaining(),
            });
        }

        let num_trials = self.config.num_trials;
        let tally = if self.config.parallel {
            // One draw from the caller; trial `i` is seeded with `base + i`.
            let base = rng.next_u64();
            (0..num_trials)
                .into_par_iter()
                .map(|i| {
                    let mut trial_rng = SeededRandom::from_seed(base.wrapping_add(i as u64));
                    self.run_trial(&deck, hole, board, opponents, &mut trial_rng)
                })
                .try_reduce(TrialTally::default, |a, b| Ok(a.merge(b)))?
        } else {
            (0..num_trials).try_fold(TrialTally::default(), |acc, _| {
                Ok::<_, EquityError>(acc.merge(self.run_trial(&deck, hole, board, opponents, &mut *rng)?))
            })?
        };

        log::debug!(
            "{} on [{}] vs {} opponent(s): {} trials, {} wins, equity {:.3}",
            hole,
            board.iter().map(Card::to_string).collect::<String>(),
            opponents,
            tally.trials,
            tally.wins,
            tally.equity()
        );
        Ok(tally)
    }

    /// Deal one runout from a private copy of `deck` and score it.
    fn run_trial<R: RandomSource + ?Sized>(
        &self,
        deck: &Deck,
        hole: &HoleCards,
        board: &[Card],
        opponents: usize,
        rng: &mut R,
    ) -> Result<TrialTally, EquityError> {
        let mut deck = deck.clone();
        deck.shuffle(rng);
        let exhausted = |deck: &Deck| EquityError::DeckExhausted {
            needed: (5 - board.len()) + 2 * opponents,
            available: deck.remaining(),
        };

        let mut full_board = [Card::from_id(0); 5];
        full_board[..board.len()].copy_from_slice(board);
        let runout = deck.deal_n(5 - board.len()).map(<[Card]>::to_vec);
        let runout = runout.ok_or_else(|| exhausted(&deck))?;
        full_board[board.len()..].copy_from_slice(&runout);

        let hero = self.evaluator.evaluate_7(hole.cards(), &full_board);
        let mut best = hero;
        let mut num_best = 1u64;
        for _ in 0..opponents {
            let opp = match deck.deal_n(2).map(|c| [c[0], c[1]]) {
                Some(opp) => opp,
                None => return Err(exhausted(&deck)),
            };
            let score = self.evaluator.evaluate_7(opp, &full_board);
            if score > best {
                best = score;
                num_best = 1;
            } else if score == best {
                num_best += 1;
            }
        }

        let mut tally = TrialTally {
            trials: 1,
            ..TrialTally::default()
        };
        if best == hero {
            if num_best == 1 {
                tally.wins = 1;
            } else {
                tally.tie_units = TIE_UNITS / num_best;
            }
        }
        Ok(tally)
    }
}
