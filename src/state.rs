//! Game-state messages and the per-decision view derived from them.

use crate::cards::{Board, Card, CardParseError, HoleCards, Street};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors turning a round-state message into a [`HandState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A community card string did not parse.
    #[error("bad community card: {0}")]
    Card(#[from] CardParseError),
    /// A community card count no street has (anything but 0, 3, 4 or 5).
    #[error("{0} community cards (expected 0, 3, 4 or 5)")]
    BoardSize(usize),
}

/// Round state as sent by the game server before each action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundState {
    /// Round number within the game.
    pub round_num: u32,
    /// Street name, e.g. "Flop".
    pub round: String,
    /// Community cards as text, e.g. `["As", "Kd", "7h"]`.
    pub community_cards: Vec<String>,
    /// Chips in the pot.
    pub pot: u64,
    /// Highest bet this street.
    pub current_bet: u64,
    /// Minimum legal raise; zero or negative when raising is closed.
    pub min_raise: i64,
    /// Maximum legal raise.
    pub max_raise: i64,
    /// Bets this street keyed by player id; `null` or negative means folded.
    pub player_bets: HashMap<String, Option<i64>>,
}

impl RoundState {
    /// Parse the community cards and the street they imply.
    pub fn community(&self) -> Result<(Street, Board), StateError> {
        let cards = self
            .community_cards
            .iter()
            .map(|s| s.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::from_cards(cards);
        match board.street() {
            Some(street) => Ok((street, board)),
            None => Err(StateError::BoardSize(board.len())),
        }
    }

    /// Chips `player_id` has already put in this street.
    pub fn bet_of(&self, player_id: u64) -> u64 {
        self.player_bets
            .get(&player_id.to_string())
            .copied()
            .flatten()
            .map_or(0, |bet| bet.max(0) as u64)
    }

    /// Players with a recorded, non-negative bet this street.
    pub fn active_players(&self) -> usize {
        self.player_bets
            .values()
            .filter(|bet| matches!(bet, Some(b) if *b >= 0))
            .count()
    }
}

/// Everything one decision needs, derived once per action request.
#[derive(Debug, Clone, PartialEq)]
pub struct HandState {
    /// The agent's hole cards; `None` when fewer or more than two were dealt.
    pub hole: Option<HoleCards>,
    /// Community cards.
    pub board: Vec<Card>,
    /// Chips in the pot.
    pub pot: u64,
    /// Chips needed to call.
    pub to_call: u64,
    /// The agent's remaining chips.
    pub stack: u64,
    /// Smallest raise the policy will make; never above `stack`.
    pub min_raise: u64,
    /// Raising is legal and affordable.
    pub can_raise: bool,
    /// `to_call / (pot + to_call)`, 0 when both are 0.
    pub pot_odds: f64,
    /// Players still in the hand, the agent included.
    pub active_players: usize,
}

impl HandState {
    /// Derive the decision view.
    ///
    /// A `min_raise` that is non-positive or above the stack becomes the
    /// stack, i.e. a raise is always an all-in at worst.
    pub fn new(
        hole: &[Card],
        board: Vec<Card>,
        pot: u64,
        to_call: u64,
        stack: u64,
        min_raise: i64,
        active_players: usize,
    ) -> Self {
        let min_raise = if min_raise <= 0 || min_raise as u64 > stack {
            stack
        } else {
            min_raise as u64
        };
        let pot_odds = if pot + to_call > 0 {
            to_call as f64 / (pot + to_call) as f64
        } else {
            0.0
        };
        Self {
            hole: HoleCards::from_slice(hole),
            board,
            pot,
            to_call,
            stack,
            min_raise,
            can_raise: min_raise > 0 && stack > to_call,
            pot_odds,
            active_players,
        }
    }

    /// Build from a round-state message for player `my_id`.
    pub fn from_round(
        round: &RoundState,
        hole: &[Card],
        my_id: u64,
        stack: u64,
    ) -> Result<Self, StateError> {
        let (street, board) = round.community()?;
        let to_call = round.current_bet.saturating_sub(round.bet_of(my_id));
        log::debug!("{} for player {}: board [{}], {} to call", street, my_id, board, to_call);
        Ok(Self::new(
            hole,
            board.cards().to_vec(),
            round.pot,
            to_call,
            stack,
            round.min_raise,
            round.active_players(),
        ))
    }

    /// Opponents to simulate: everyone else active, at least one.
    pub fn num_opponents(&self) -> usize {
        self.active_players.saturating_sub(1).max(1)
    }

    /// Clamp a bet into `[min_raise, stack]`.
    pub fn clamp_raise(&self, amount: u64) -> u64 {
        amount.min(self.stack).max(self.min_raise)
    }

    /// True when the board is empty.
    pub fn is_preflop(&self) -> bool {
        self.board.is_empty()
    }
}
