//! Postflop decision policy.
//!
//! Equity from the Monte-Carlo estimator is compared against a value
//! threshold and the pot odds. A few randomized deviations (slow-plays,
//! bluffs, flipped borderline decisions, semi-bluffs) keep the betting
//! pattern from being a pure function of hand strength.
//!
//! Rules are tried in order and the first match wins:
//!
//! ```text
//!  1. slow-play     equity > 0.90, 20%        -> CHECK
//!  2. pure bluff    equity < 0.20, 10%        -> RAISE bluff size
//!  3. borderline    |equity - T| < 0.05, 30%  -> above T: CHECK, else RAISE bluff size
//!  4. value         equity > T                -> RAISE value size
//!  5. semi-bluff    strong draw, 40%          -> RAISE bluff size
//!  6. pot odds      equity > odds + buffer    -> CALL
//!  7. free card     nothing to call           -> CHECK
//!  8.                                         -> FOLD
//! ```
//!
//! `T` is the value threshold (0.55) plus the multiway buffer; every raise
//! rule also requires that raising is legal.

use super::action::Action;
use super::config::{PolicyConfig, SizingRange};
use super::random::RandomSource;
use crate::cards::has_strong_draw;
use crate::equity::{EquityError, EquityEstimator};
use crate::state::HandState;

/// Postflop policy: estimator plus immutable strategy constants.
#[derive(Debug, Clone, Default)]
pub struct PostflopPolicy {
    config: PolicyConfig,
    estimator: EquityEstimator,
}

impl PostflopPolicy {
    /// Create a policy.
    pub fn new(config: PolicyConfig, estimator: EquityEstimator) -> Self {
        Self { config, estimator }
    }

    /// Estimate equity for `state` and pick an action.
    ///
    /// Malformed hole cards fold. Estimator errors are configuration errors
    /// and are returned, not folded.
    pub fn decide<R: RandomSource + ?Sized>(
        &self,
        state: &HandState,
        rng: &mut R,
    ) -> Result<Action, EquityError> {
        let Some(hole) = state.hole else {
            log::warn!("no valid hole cards, folding");
            return Ok(Action::Fold);
        };
        if state.is_preflop() {
            log::debug!("postflop policy asked to act preflop; simulating from an empty board");
        }

        let equity = self
            .estimator
            .estimate(&hole, &state.board, state.num_opponents(), rng)
            .map_err(|e| {
                log::error!("equity estimate failed: {}", e);
                e
            })?;
        let strong_draw = has_strong_draw(&hole.cards(), &state.board);
        Ok(self.decide_with_equity(equity, strong_draw, state, rng))
    }

    /// The rule cascade for a known equity and draw flag.
    pub fn decide_with_equity<R: RandomSource + ?Sized>(
        &self,
        equity: f64,
        strong_draw: bool,
        state: &HandState,
        rng: &mut R,
    ) -> Action {
        let c = &self.config;
        let buffer = c.buffer_for(state.active_players);
        let threshold = c.value_threshold + buffer;

        let value_bet = Self::bet_size(state.pot, c.value_bet_size, rng);
        let bluff_bet = Self::bet_size(state.pot, c.bluff_bet_size, rng);

        if equity > c.slow_play_equity && rng.chance(c.slow_play_chance) {
            log::info!("[range balance] slow-playing a monster (equity={:.2})", equity);
            return Action::Check;
        }

        if equity < c.bluff_equity && state.can_raise && rng.chance(c.bluff_chance) {
            log::info!("[range balance] pure bluff, bet {}", bluff_bet);
            return Action::Raise(state.clamp_raise(bluff_bet));
        }

        let gap = (equity - threshold).abs();
        if state.can_raise && gap > 0.0 && gap < c.borderline_gap && rng.chance(c.borderline_chance) {
            if equity > threshold {
                log::info!("[randomize] borderline value hand checks (equity={:.2})", equity);
                return Action::Check;
            }
            log::info!("[randomize] borderline hand bets (equity={:.2})", equity);
            return Action::Raise(state.clamp_raise(bluff_bet));
        }

        if equity > threshold && state.can_raise {
            log::info!("[bet sizing] value bet {} (equity={:.2})", value_bet, equity);
            return Action::Raise(state.clamp_raise(value_bet));
        }

        if strong_draw && state.can_raise && rng.chance(c.semi_bluff_chance) {
            log::info!("[bet sizing] semi-bluff with a draw, bet {}", bluff_bet);
            return Action::Raise(state.clamp_raise(bluff_bet));
        }

        if state.to_call > 0 && equity > state.pot_odds + buffer {
            log::info!(
                "[postflop] calling: equity {:.2} > pot odds {:.2} (buffer={:.2})",
                equity,
                state.pot_odds,
                buffer
            );
            return Action::Call(state.to_call);
        }

        if state.to_call == 0 {
            log::info!("[postflop] checking");
            return Action::Check;
        }

        log::info!("[postflop] folding (equity={:.2})", equity);
        Action::Fold
    }

    fn bet_size<R: RandomSource + ?Sized>(pot: u64, range: SizingRange, rng: &mut R) -> u64 {
        (pot as f64 * rng.uniform(range.min, range.max)) as u64
    }
}
