//! Game-server lifecycle: the [`Bot`] trait and the [`PokerBot`] agent.
//!
//! The server calls `on_start` once per game, then `on_round_start`,
//! `get_action` (any number of times) and `on_end_round` per round, and
//! finally `on_end_game`.

use crate::cards::{Card, CardParseError};
use crate::config::{BotConfig, ConfigError};
use crate::equity::{EquityError, EquityEstimator};
use crate::policy::{Action, Position, PostflopPolicy, PreflopPolicy, RandomSource, SeededRandom};
use crate::state::{HandState, RoundState, StateError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Anything that can go wrong while the bot plays.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bad card text in a game message.
    #[error("card error: {0}")]
    Card(#[from] CardParseError),
    /// Malformed round state.
    #[error("state error: {0}")]
    State(#[from] StateError),
    /// The equity estimator could not run.
    #[error("equity error: {0}")]
    Equity(#[from] EquityError),
    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Game-start message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStart {
    /// Chips each player starts with.
    pub starting_chips: u64,
    /// The agent's hole cards as text.
    pub player_hands: Vec<String>,
    /// Small blind size.
    pub blind_amount: u64,
    /// Big-blind player id.
    pub big_blind_player_id: u64,
    /// Small-blind player id; treated as the dealer.
    pub small_blind_player_id: u64,
    /// Player ids in seat order.
    pub all_players: Vec<u64>,
}

/// Game-end message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameEnd {
    /// The agent's final score.
    pub player_score: f64,
    /// Final score of every player, keyed by id.
    pub all_scores: HashMap<String, f64>,
    /// Hands shown at showdown, keyed by id.
    pub active_players_hands: HashMap<String, Vec<String>>,
}

/// Hooks a game server drives.
pub trait Bot {
    /// A game begins.
    fn on_start(&mut self, start: &GameStart) -> Result<(), BotError>;

    /// A betting round begins.
    fn on_round_start(&mut self, round: &RoundState, remaining_chips: u64) -> Result<(), BotError>;

    /// Choose an action.
    fn get_action(&mut self, round: &RoundState, remaining_chips: u64) -> Result<Action, BotError>;

    /// A betting round ended.
    fn on_end_round(&mut self, round: &RoundState, remaining_chips: u64) -> Result<(), BotError>;

    /// The game is over.
    fn on_end_game(&mut self, round: &RoundState, end: &GameEnd) -> Result<(), BotError>;
}

/// The chart-preflop, equity-postflop agent.
#[derive(Debug)]
pub struct PokerBot<R: RandomSource> {
    id: u64,
    hole: Vec<Card>,
    seats: Vec<u64>,
    dealer: u64,
    preflop: PreflopPolicy,
    postflop: PostflopPolicy,
    rng: R,
}

impl PokerBot<SeededRandom> {
    /// Bot whose randomness comes from the configured seed (or entropy).
    pub fn from_config(id: u64, config: BotConfig) -> Result<Self, BotError> {
        let rng = SeededRandom::from_optional_seed(config.seed);
        Self::new(id, config, rng)
    }
}

impl<R: RandomSource> PokerBot<R> {
    /// Create a bot for player `id`.
    pub fn new(id: u64, config: BotConfig, rng: R) -> Result<Self, BotError> {
        config.validate()?;
        Ok(Self {
            id,
            hole: Vec::new(),
            seats: vec![id],
            dealer: id,
            preflop: PreflopPolicy::new(config.preflop),
            postflop: PostflopPolicy::new(config.policy, EquityEstimator::new(config.equity)),
            rng,
        })
    }

    /// Player id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Hole cards recorded at game start.
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// Seat position given the recorded table.
    pub fn position(&self) -> Position {
        Position::detect(&self.seats, self.id, self.dealer)
    }

    /// Set hole cards directly, for callers without a game-start message.
    pub fn set_hole(&mut self, hole: Vec<Card>) {
        self.hole = hole;
    }
}

impl<R: RandomSource> Bot for PokerBot<R> {
    fn on_start(&mut self, start: &GameStart) -> Result<(), BotError> {
        self.hole = start
            .player_hands
            .iter()
            .map(|s| s.parse::<Card>())
            .collect::<Result<_, _>>()?;
        if !start.all_players.is_empty() {
            self.seats = start.all_players.clone();
        }
        self.dealer = start.small_blind_player_id;
        log::info!(
            "game starting: id {}, hand {:?}, {} players, position {}",
            self.id,
            start.player_hands,
            self.seats.len(),
            self.position()
        );
        Ok(())
    }

    fn on_round_start(&mut self, round: &RoundState, remaining_chips: u64) -> Result<(), BotError> {
        log::debug!(
            "round {} ({}) starting with {} chips",
            round.round_num,
            round.round,
            remaining_chips
        );
        Ok(())
    }

    fn get_action(&mut self, round: &RoundState, remaining_chips: u64) -> Result<Action, BotError> {
        let state = HandState::from_round(round, &self.hole, self.id, remaining_chips)?;
        let action = if state.is_preflop() {
            self.preflop.decide(&state, self.position(), &mut self.rng)
        } else {
            self.postflop.decide(&state, &mut self.rng)?
        };
        log::info!("round {}: {}", round.round_num, action);
        Ok(action)
    }

    fn on_end_round(&mut self, round: &RoundState, remaining_chips: u64) -> Result<(), BotError> {
        log::debug!("round {} over, {} chips left", round.round_num, remaining_chips);
        Ok(())
    }

    fn on_end_game(&mut self, _round: &RoundState, end: &GameEnd) -> Result<(), BotError> {
        log::info!("game over, score {}", end.player_score);
        log::debug!("final scores {:?}", end.all_scores);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ScriptedRandom;

    fn start(hand: &[&str]) -> GameStart {
        GameStart {
            starting_chips: 1000,
            player_hands: hand.iter().map(|s| s.to_string()).collect(),
            blind_amount: 10,
            big_blind_player_id: 3,
            small_blind_player_id: 1,
            all_players: vec![1, 2, 3, 4, 5, 6],
        }
    }

    fn round(json: &str) -> RoundState {
        serde_json::from_str(json).unwrap()
    }

    fn bot(id: u64) -> PokerBot<ScriptedRandom> {
        PokerBot::new(id, BotConfig::default(), ScriptedRandom::never()).unwrap()
    }

    #[test]
    fn test_on_start_records_table() {
        let mut b = bot(4);
        b.on_start(&start(&["Ah", "Ad"])).unwrap();
        assert_eq!(b.hole().len(), 2);
        assert_eq!(b.position(), Position::UTG);
    }

    #[test]
    fn test_bad_hand_text_is_an_error() {
        let mut b = bot(4);
        assert!(matches!(b.on_start(&start(&["Ah", "Xx"])), Err(BotError::Card(_))));
    }

    #[test]
    fn test_preflop_dispatch() {
        let mut b = bot(4);
        b.on_start(&start(&["Ah", "Ad"])).unwrap();
        let rs = round(
            r#"{ "round": "Preflop", "pot": 30, "current_bet": 20, "min_raise": 40,
                 "player_bets": { "1": 10, "3": 20 } }"#,
        );
        assert_eq!(b.get_action(&rs, 1000).unwrap(), Action::Raise(40));
    }

    #[test]
    fn test_postflop_dispatch() {
        // sizing draws at 0.0, coin flips at 1.0
        let rng = ScriptedRandom::new(vec![0.0, 0.0, 1.0]);
        let mut b = PokerBot::new(1, BotConfig::default(), rng).unwrap();
        b.on_start(&start(&["As", "Ks"])).unwrap();
        let rs = round(
            r#"{ "round": "River", "community_cards": ["Qs", "Js", "Ts", "2c", "3d"],
                 "pot": 200, "current_bet": 0, "min_raise": 20,
                 "player_bets": { "1": 0, "2": 0 } }"#,
        );
        // royal flush, value bet at 0.6 pot
        assert_eq!(b.get_action(&rs, 1000).unwrap(), Action::Raise(120));
    }

    #[test]
    fn test_missing_hole_cards_fold() {
        let mut b = bot(1);
        let rs = round(r#"{ "community_cards": ["2c", "7d", "Ts"], "current_bet": 50 }"#);
        assert_eq!(b.get_action(&rs, 1000).unwrap(), Action::Fold);
    }

    #[test]
    fn test_deck_exhaustion_propagates() {
        let mut b = bot(0);
        b.set_hole(Card::parse_many("AhKd").unwrap());
        let bets: Vec<String> = (0..30).map(|i| format!("\"{}\": 0", i)).collect();
        let rs = round(&format!(
            r#"{{ "community_cards": ["2c", "7d", "Ts"], "player_bets": {{ {} }} }}"#,
            bets.join(", ")
        ));
        assert!(matches!(
            b.get_action(&rs, 1000),
            Err(BotError::Equity(EquityError::DeckExhausted { .. }))
        ));
    }

    #[test]
    fn test_two_card_board_is_rejected() {
        let mut b = bot(1);
        b.on_start(&start(&["As", "Ks"])).unwrap();
        let rs = round(r#"{ "community_cards": ["2c", "7d"], "pot": 100, "min_raise": 20 }"#);
        assert!(matches!(
            b.get_action(&rs, 1000),
            Err(BotError::State(StateError::BoardSize(2)))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = BotConfig::default();
        config.policy.bluff_chance = 2.0;
        assert!(matches!(
            PokerBot::new(1, config, ScriptedRandom::never()),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn test_lifecycle_hooks_succeed() {
        let mut b = PokerBot::from_config(2, BotConfig::default().with_seed(7)).unwrap();
        let rs = RoundState::default();
        b.on_start(&start(&["9c", "8c"])).unwrap();
        b.on_round_start(&rs, 1000).unwrap();
        b.on_end_round(&rs, 1000).unwrap();
        b.on_end_game(&rs, &GameEnd::default()).unwrap();
        assert_eq!(b.position(), Position::SB);
    }
}
