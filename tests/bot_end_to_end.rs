//! Drives the bot through whole hands the way a game server would.

use postflop_bot::policy::ScriptedRandom;
use postflop_bot::{
    Action, Bot, BotConfig, Card, GameEnd, GameStart, HandState, PokerBot, PostflopPolicy,
    RoundState,
};

fn game_start(hand: &[&str]) -> GameStart {
    GameStart {
        starting_chips: 1000,
        player_hands: hand.iter().map(|s| s.to_string()).collect(),
        blind_amount: 10,
        big_blind_player_id: 2,
        small_blind_player_id: 1,
        all_players: vec![1, 2, 3],
    }
}

fn round(board: &[&str], pot: u64, current_bet: u64, bets: &[(u64, i64)]) -> RoundState {
    RoundState {
        round_num: 1,
        round: (if board.is_empty() { "Preflop" } else { "Flop" }).to_string(),
        community_cards: board.iter().map(|s| s.to_string()).collect(),
        pot,
        current_bet,
        min_raise: 2 * current_bet.max(10) as i64,
        max_raise: 1000,
        player_bets: bets.iter().map(|(id, b)| (id.to_string(), Some(*b))).collect(),
    }
}

fn assert_legal(action: Action, to_call: u64, min_raise: u64, stack: u64) {
    match action {
        Action::Fold | Action::Check => {}
        Action::Call(amount) => assert_eq!(amount, to_call),
        Action::Raise(amount) => assert!(min_raise <= amount && amount <= stack, "{action}"),
    }
}

#[test]
fn test_full_hand_with_seeded_bot() {
    let mut bot = PokerBot::from_config(3, BotConfig::default().with_seed(2024)).unwrap();
    bot.on_start(&game_start(&["Jh", "Jd"])).unwrap();

    let streets: [&[&str]; 4] = [
        &[],
        &["2c", "7d", "Ts"],
        &["2c", "7d", "Ts", "Kh"],
        &["2c", "7d", "Ts", "Kh", "3s"],
    ];
    for (street, board) in streets.iter().enumerate() {
        let rs = RoundState {
            round_num: street as u32 + 1,
            ..round(board, 60, 20, &[(1, 20), (2, 20), (3, 0)])
        };
        bot.on_round_start(&rs, 900).unwrap();
        let action = bot.get_action(&rs, 900).unwrap();
        assert_legal(action, 20, rs.min_raise as u64, 900);
        bot.on_end_round(&rs, 900).unwrap();
    }
    bot.on_end_game(&RoundState::default(), &GameEnd::default()).unwrap();
}

#[test]
fn test_same_seed_same_decisions() {
    let play = || {
        let mut bot = PokerBot::from_config(3, BotConfig::default().with_seed(99)).unwrap();
        bot.on_start(&game_start(&["9s", "8s"])).unwrap();
        let rs = round(&["7s", "6d", "2s"], 120, 40, &[(1, 40), (2, 0), (3, 0)]);
        (0..10).map(|_| bot.get_action(&rs, 500).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_cascade_scenarios() {
    let policy = PostflopPolicy::default();
    let hole = Card::parse_many("AhKd").unwrap();
    let board = Card::parse_many("2c 7d Ts").unwrap();
    let mut rng = ScriptedRandom::never();

    // monster with raising rights
    let s = HandState::new(&hole, board.clone(), 200, 0, 1000, 20, 2);
    match policy.decide_with_equity(0.95, false, &s, &mut rng) {
        Action::Raise(amount) => assert!(s.min_raise <= amount && amount <= s.stack),
        other => panic!("expected a raise, got {other:?}"),
    }

    // air with nothing to call
    let s = HandState::new(&hole, board.clone(), 200, 0, 1000, 20, 2);
    assert_eq!(policy.decide_with_equity(0.1, false, &s, &mut rng), Action::Check);

    // priced in: odds 50 / 167 < 0.6, and the call uses the whole stack
    let s = HandState::new(&hole, board, 117, 50, 50, 20, 2);
    assert!((s.pot_odds - 0.3).abs() < 0.01);
    assert_eq!(policy.decide_with_equity(0.6, false, &s, &mut rng), Action::Call(50));
}

#[test]
fn test_start_message_from_json() {
    let start: GameStart = serde_json::from_str(
        r#"{ "starting_chips": 1000, "player_hands": ["Ac", "Kc"], "blind_amount": 10,
             "big_blind_player_id": 2, "small_blind_player_id": 1, "all_players": [1, 2] }"#,
    )
    .unwrap();
    let mut bot = PokerBot::new(2, BotConfig::default(), ScriptedRandom::never()).unwrap();
    bot.on_start(&start).unwrap();
    assert_eq!(bot.hole().len(), 2);

    // heads-up big blind, AKs min-raises from the wide chart
    let rs = round(&[], 30, 20, &[(1, 10), (2, 20)]);
    assert_eq!(bot.get_action(&rs, 980).unwrap(), Action::Raise(40));
}
