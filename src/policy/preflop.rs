//! Preflop play from static 6-max opening charts.
//!
//! The chart is keyed by seat [`Position`] and [`HandClass`] and built once.
//! Hands missing from a chart fold; a small share of chart calls and raises
//! against cheap bets are flipped to keep the ranges from being exact.

use super::action::Action;
use super::config::PreflopConfig;
use super::random::RandomSource;
use crate::cards::card::RANK_CHARS;
use crate::cards::HoleCards;
use crate::state::HandState;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Seat relative to the button, 6-max naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Button.
    BTN,
    /// Small blind.
    SB,
    /// Big blind.
    BB,
    /// Under the gun.
    UTG,
    /// Middle position.
    MP,
    /// Cutoff.
    CO,
}

impl Position {
    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            Position::BTN => "BTN",
            Position::SB => "SB",
            Position::BB => "BB",
            Position::UTG => "UTG",
            Position::MP => "MP",
            Position::CO => "CO",
        }
    }

    /// All positions in seat order from the button.
    pub fn all() -> &'static [Position] {
        &[
            Position::BTN,
            Position::SB,
            Position::BB,
            Position::UTG,
            Position::MP,
            Position::CO,
        ]
    }

    /// Position of `my_id` given the seat order and the dealer.
    ///
    /// Heads-up the dealer posts the small blind. From three players on,
    /// the offset from the dealer's seat picks the position. Unknown ids or
    /// tables above six seats fall back to the button.
    pub fn detect(seats: &[u64], my_id: u64, dealer_id: u64) -> Position {
        let n = seats.len();
        if n == 2 {
            return if my_id == dealer_id {
                Position::SB
            } else {
                Position::BB
            };
        }
        let me = seats.iter().position(|&id| id == my_id);
        let dealer = seats.iter().position(|&id| id == dealer_id);
        match (me, dealer) {
            (Some(me), Some(dealer)) => {
                let offset = (me + n - dealer) % n;
                Position::all().get(offset).copied().unwrap_or(Position::BTN)
            }
            _ => Position::BTN,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Starting hand class: ranks high first, plus suitedness for non-pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandClass {
    high: u8,
    low: u8,
    suited: bool,
}

impl HandClass {
    /// Class of the given hole cards.
    pub fn of(hole: &HoleCards) -> Self {
        Self {
            high: hole.card1.rank(),
            low: hole.card2.rank(),
            suited: hole.is_suited() && !hole.is_pair(),
        }
    }

    /// Check if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }
}

impl FromStr for HandClass {
    type Err = String;

    /// Parse chart notation: "AA", "AKs", "QJo".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let rank = |c: char| {
            RANK_CHARS
                .iter()
                .position(|&r| r == c)
                .map(|r| r as u8)
                .ok_or_else(|| format!("bad rank in '{}'", s))
        };
        match chars.as_slice() {
            [a, b] if a == b => {
                let r = rank(*a)?;
                Ok(Self { high: r, low: r, suited: false })
            }
            [a, b, kind @ ('s' | 'o')] if a != b => {
                let (x, y) = (rank(*a)?, rank(*b)?);
                Ok(Self {
                    high: x.max(y),
                    low: x.min(y),
                    suited: *kind == 's',
                })
            }
            _ => Err(format!("bad hand class '{}'", s)),
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, l) = (RANK_CHARS[self.high as usize], RANK_CHARS[self.low as usize]);
        if self.is_pair() {
            write!(f, "{}{}", h, l)
        } else {
            write!(f, "{}{}{}", h, l, if self.suited { 's' } else { 'o' })
        }
    }
}

/// What the chart says to do with a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartAction {
    /// Open or re-raise.
    Raise,
    /// Flat call.
    Call,
    /// Not in the range.
    Fold,
}

use ChartAction::{Call, Raise};

const PAIRS: &[(&str, ChartAction)] = &[
    ("AA", Raise), ("KK", Raise), ("QQ", Raise), ("JJ", Raise), ("TT", Raise), ("99", Raise), ("88", Raise),
    ("77", Raise), ("66", Raise), ("55", Raise), ("44", Raise), ("33", Raise), ("22", Raise),
];

const UTG: &[(&str, ChartAction)] = &[
    ("AA", Raise), ("KK", Raise), ("QQ", Raise), ("JJ", Raise), ("TT", Raise), ("AKs", Raise), ("AQs", Raise),
    ("AJs", Raise), ("KQs", Raise), ("AKo", Raise), ("99", Call), ("ATs", Call), ("KJs", Call), ("QJs", Call),
    ("AQo", Call),
];

const MP: &[(&str, ChartAction)] = &[
    ("AA", Raise), ("KK", Raise), ("QQ", Raise), ("JJ", Raise), ("TT", Raise), ("99", Raise), ("88", Raise),
    ("AKs", Raise), ("AQs", Raise), ("AJs", Raise), ("KQs", Raise), ("AKo", Raise), ("AQo", Raise), ("ATs", Call),
    ("KJs", Call), ("QJs", Call),
];

const CO: &[(&str, ChartAction)] = &[
    ("AA", Raise), ("KK", Raise), ("QQ", Raise), ("JJ", Raise), ("TT", Raise), ("99", Raise), ("88", Raise),
    ("77", Raise), ("AKs", Raise), ("AQs", Raise), ("AJs", Raise), ("ATs", Raise), ("KQs", Raise), ("KJs", Raise),
    ("QJs", Raise), ("JTs", Raise), ("AKo", Raise), ("AQo", Raise), ("AJo", Call), ("KQo", Call),
];

/// Late positions and the blinds share one wide range.
const WIDE: &[(&str, ChartAction)] = &[
    ("AKs", Raise), ("AQs", Raise), ("AJs", Raise), ("ATs", Raise), ("KQs", Raise), ("KJs", Raise), ("QJs", Raise),
    ("JTs", Raise), ("T9s", Raise), ("98s", Raise), ("87s", Raise), ("76s", Raise), ("65s", Raise), ("54s", Raise),
    ("AKo", Raise), ("AQo", Raise), ("AJo", Raise), ("KQo", Raise), ("KJo", Call), ("QJo", Call), ("JTo", Call),
];

/// Position-keyed opening charts.
#[derive(Debug, Clone)]
pub struct PreflopChart {
    charts: FxHashMap<Position, FxHashMap<HandClass, ChartAction>>,
}

impl PreflopChart {
    /// The built-in 6-max charts.
    pub fn six_max() -> Self {
        let mut charts = FxHashMap::default();
        charts.insert(Position::UTG, Self::table(&[UTG]));
        charts.insert(Position::MP, Self::table(&[MP]));
        charts.insert(Position::CO, Self::table(&[CO]));
        for pos in [Position::BTN, Position::SB, Position::BB] {
            charts.insert(pos, Self::table(&[PAIRS, WIDE]));
        }
        Self { charts }
    }

    fn table(parts: &[&[(&str, ChartAction)]]) -> FxHashMap<HandClass, ChartAction> {
        parts
            .iter()
            .flat_map(|part| part.iter())
            .filter_map(|(notation, action)| notation.parse().ok().map(|hc| (hc, *action)))
            .collect()
    }

    /// Chart action for a hand; positions without a chart use the button's.
    pub fn lookup(&self, position: Position, hand: HandClass) -> ChartAction {
        self.charts
            .get(&position)
            .or_else(|| self.charts.get(&Position::BTN))
            .and_then(|chart| chart.get(&hand))
            .copied()
            .unwrap_or(ChartAction::Fold)
    }
}

impl Default for PreflopChart {
    fn default() -> Self {
        Self::six_max()
    }
}

/// Preflop policy: chart lookup plus randomized deviations.
#[derive(Debug, Clone, Default)]
pub struct PreflopPolicy {
    config: PreflopConfig,
    chart: PreflopChart,
}

impl PreflopPolicy {
    /// Create a policy with the built-in charts.
    pub fn new(config: PreflopConfig) -> Self {
        Self {
            config,
            chart: PreflopChart::six_max(),
        }
    }

    /// Pick a preflop action for a player in `position`.
    pub fn decide<R: RandomSource + ?Sized>(
        &self,
        state: &HandState,
        position: Position,
        rng: &mut R,
    ) -> Action {
        let Some(hole) = state.hole else {
            log::warn!("[preflop] not enough hole cards, folding");
            return Action::Fold;
        };
        let hand = HandClass::of(&hole);
        let chart_action = self.chart.lookup(position, hand);
        log::info!("[preflop] position {}, hand {}, chart {:?}", position, hand, chart_action);

        let c = &self.config;
        let (to_call, stack, min_raise) = (state.to_call, state.stack, state.min_raise);
        let cheap = |fraction: f64| to_call > 0 && (to_call as f64) < stack as f64 * fraction;

        if chart_action == ChartAction::Call
            && cheap(c.call_to_raise_stack_fraction)
            && stack > min_raise
            && rng.chance(c.call_to_raise_chance)
        {
            log::info!("[randomize] borderline {}: raising instead of calling", hand);
            return Action::Raise(min_raise);
        }
        if chart_action == ChartAction::Raise
            && cheap(c.raise_to_call_stack_fraction)
            && rng.chance(c.raise_to_call_chance)
        {
            log::info!("[randomize] borderline {}: calling instead of raising", hand);
            return Action::Call(to_call);
        }

        match chart_action {
            ChartAction::Raise if stack > min_raise => Action::Raise(min_raise),
            ChartAction::Call if to_call > 0 && stack >= to_call => Action::Call(to_call),
            _ if to_call == 0 => Action::Check,
            _ => Action::Fold,
        }
    }
}
