//! Command-line driver for the bot.
//!
//! `decide` answers one action request from a round-state JSON file.
//! `equity` repeats an equity estimate and reports its spread.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use env_logger::Env;
use postflop_bot::{
    Board, Bot, BotConfig, EquityConfig, EquityEstimator, HandEvaluator, HoleCards, PokerBot,
    RoundState, SeededRandom,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Pick an action for a round-state JSON file")]
    Decide {
        /// Round-state JSON as sent by the game server.
        #[arg(long)]
        state: PathBuf,
        /// Hole cards, e.g. AsKd.
        #[arg(long)]
        hole: String,
        /// Remaining chips.
        #[arg(long)]
        stack: u64,
        /// Our player id.
        #[arg(long, default_value_t = 0)]
        id: u64,
        /// Random seed; entropy when absent.
        #[arg(long)]
        seed: Option<u64>,
        /// Monte-Carlo trials per estimate.
        #[arg(long)]
        trials: Option<usize>,
        /// Bot configuration JSON.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    #[command(about = "Estimate equity and its spread over repeated runs", alias = "eq")]
    Equity {
        /// Hole cards, e.g. AsKd.
        #[arg(long)]
        hole: String,
        /// Community cards, e.g. "Qs Js Ts".
        #[arg(long)]
        board: Option<String>,
        /// Opponents to simulate.
        #[arg(long, default_value_t = 1)]
        opponents: usize,
        /// Monte-Carlo trials per estimate.
        #[arg(long, default_value_t = 200)]
        trials: usize,
        /// Independent estimates to run.
        #[arg(long, default_value_t = 20)]
        runs: usize,
        /// Random seed; entropy when absent.
        #[arg(long)]
        seed: Option<u64>,
        /// Spread trials over the rayon pool.
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match Command::parse() {
        Command::Decide {
            state,
            hole,
            stack,
            id,
            seed,
            trials,
            config,
        } => {
            let mut bot_config = match config {
                Some(path) => BotConfig::from_json_file(path)?,
                None => BotConfig::default(),
            };
            if let Some(seed) = seed {
                bot_config = bot_config.with_seed(seed);
            }
            if let Some(trials) = trials {
                bot_config.equity = bot_config.equity.with_trials(trials);
            }

            let round: RoundState = serde_json::from_str(&fs::read_to_string(state)?)?;
            let hole: HoleCards = hole.parse()?;

            let mut bot = PokerBot::from_config(id, bot_config)?;
            bot.set_hole(hole.cards().to_vec());
            let action = bot.get_action(&round, stack)?;
            println!("{}", serde_json::to_string(&action)?);
        }
        Command::Equity {
            hole,
            board,
            opponents,
            trials,
            runs,
            seed,
            parallel,
        } => {
            let hole: HoleCards = hole.parse()?;
            let board: Board = board.as_deref().unwrap_or("").parse()?;
            let config = EquityConfig::default()
                .with_trials(trials)
                .with_parallel(parallel);
            config.validate()?;
            let estimator = EquityEstimator::new(config);
            let mut rng = SeededRandom::from_optional_seed(seed);

            println!("=== Equity: {} on [{}] vs {} ===", hole, board, opponents);
            let mut known = hole.cards().to_vec();
            known.extend_from_slice(board.cards());
            // Preflop there are too few cards for a made hand.
            if let Ok(made) = HandEvaluator::new().evaluate_cards(&known) {
                println!("Made hand: {:?}", made.category());
            }
            let start = Instant::now();
            let samples = (0..runs.max(1))
                .map(|_| estimator.estimate(&hole, board.cards(), opponents, &mut rng))
                .collect::<Result<Vec<f64>, _>>()?;
            let elapsed = start.elapsed();

            let n = samples.len() as f64;
            let mean = samples.iter().sum::<f64>() / n;
            let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
            println!("Runs: {} x {} trials", samples.len(), trials);
            println!("Mean: {:.4}", mean);
            println!("Std dev: {:.4}", variance.sqrt());
            println!("Time: {:.2?}", elapsed);
        }
    }
    Ok(())
}
