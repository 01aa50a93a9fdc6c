//! Poker hand evaluation.
//!
//! Ranks any 5, 6 or 7 cards by the best five-card hand they contain.
//! `HandRank` is totally ordered: a greater rank is a stronger hand and
//! equal ranks split the pot.

use super::card::Card;
use std::cmp::Ordering;
use thiserror::Error;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No made hand.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pair.
    TwoPair = 2,
    /// Trips or a set.
    ThreeOfAKind = 3,
    /// Five consecutive ranks.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Trips plus a pair.
    FullHouse = 6,
    /// Quads.
    FourOfAKind = 7,
    /// Straight in one suit.
    StraightFlush = 8,
}

/// Error for card sets the evaluator cannot rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Only 5, 6 or 7 cards can be ranked.
    #[error("cannot evaluate {0} cards (need 5 to 7)")]
    CardCount(usize),
}

/// Comparable hand strength.
/// Format: category (4 bits) | kicker1 (4 bits) | kicker2 (4 bits) | ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandRank(u32);

impl HandRank {
    fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        match self.0 >> 20 {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Stateless hand evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Rank 5 to 7 cards by their best five-card subset.
    pub fn evaluate_cards(&self, cards: &[Card]) -> Result<HandRank, EvalError> {
        match cards.len() {
            5..=7 => Ok(self.best_five(cards)),
            n => Err(EvalError::CardCount(n)),
        }
    }

    /// Rank the agent's seven cards: two hole cards plus a full board.
    #[inline]
    pub fn evaluate_7(&self, hole: [Card; 2], board: &[Card; 5]) -> HandRank {
        let cards = [hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]];
        self.best_five(&cards)
    }

    /// Best rank over every five-card subset (1, 6 or 21 subsets).
    fn best_five(&self, cards: &[Card]) -> HandRank {
        let n = cards.len();
        let mut best = HandRank(0);
        let mut hand = [cards[0]; 5];
        // Choose which cards to leave out; the rest form the hand.
        for skip_a in 0..n {
            for skip_b in skip_a..n {
                if (n == 5 && (skip_a, skip_b) != (0, 0))
                    || (n == 6 && skip_a != skip_b)
                    || (n == 7 && skip_a == skip_b)
                {
                    continue;
                }
                let mut k = 0;
                for (i, &card) in cards.iter().enumerate() {
                    if n > 5 && (i == skip_a || i == skip_b) {
                        continue;
                    }
                    hand[k] = card;
                    k += 1;
                }
                best = best.max(self.evaluate_5(&hand));
            }
        }
        best
    }

    /// Evaluate exactly five distinct cards.
    fn evaluate_5(&self, cards: &[Card; 5]) -> HandRank {
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut rank_bits = 0u16;

        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
            rank_bits |= 1 << card.rank();
        }

        let is_flush = suit_counts.iter().any(|&c| c == 5);
        let straight_high = Self::find_straight(rank_bits);

        if let (true, Some(high)) = (is_flush, straight_high) {
            return HandRank::new(HandCategory::StraightFlush, &[high]);
        }

        // Group ranks by multiplicity, highest rank first within each group.
        let mut groups = [RankGroup::default(); 5];
        for rank in (0..13u8).rev() {
            let count = rank_counts[rank as usize] as usize;
            if count > 0 {
                groups[count].push(rank);
            }
        }
        let quads = groups[4].ranks();
        let trips = groups[3].ranks();
        let pairs = groups[2].ranks();
        let singles = groups[1].ranks();

        if let Some(&quad) = quads.first() {
            let kicker = singles.first().copied().unwrap_or(0);
            return HandRank::new(HandCategory::FourOfAKind, &[quad, kicker]);
        }

        if let (Some(&trip), Some(&pair)) = (trips.first(), pairs.first()) {
            return HandRank::new(HandCategory::FullHouse, &[trip, pair]);
        }

        if is_flush {
            // Every card shares the suit; singles already holds the ranks high to low.
            return HandRank::new(HandCategory::Flush, singles);
        }

        if let Some(high) = straight_high {
            return HandRank::new(HandCategory::Straight, &[high]);
        }

        if let Some(&trip) = trips.first() {
            return HandRank::new(HandCategory::ThreeOfAKind, &[trip, singles[0], singles[1]]);
        }

        match pairs {
            [high, low] => HandRank::new(HandCategory::TwoPair, &[*high, *low, singles[0]]),
            [pair] => HandRank::new(
                HandCategory::OnePair,
                &[*pair, singles[0], singles[1], singles[2]],
            ),
            _ => HandRank::new(HandCategory::HighCard, singles),
        }
    }

    /// Highest straight in a rank bitmask, as the rank index of its top card.
    fn find_straight(rank_bits: u16) -> Option<u8> {
        for high in (RANK_5_INDEX..=12u8).rev() {
            let mask = if high == RANK_5_INDEX {
                // Wheel: A-2-3-4-5
                0b1_0000_0000_1111u16
            } else {
                0b11111u16 << (high - 4)
            };
            if rank_bits & mask == mask {
                return Some(high);
            }
        }
        None
    }
}

const RANK_5_INDEX: u8 = 3;

/// Ranks sharing one multiplicity within a five-card hand.
#[derive(Clone, Copy, Default)]
struct RankGroup {
    ranks: [u8; 5],
    len: usize,
}

impl RankGroup {
    #[inline]
    fn push(&mut self, rank: u8) {
        self.ranks[self.len] = rank;
        self.len += 1;
    }

    #[inline]
    fn ranks(&self) -> &[u8] {
        &self.ranks[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    fn rank(s: &str) -> HandRank {
        HandEvaluator::new().evaluate_cards(&cards(s)).unwrap()
    }

    #[test]
    fn test_categories() {
        assert_eq!(rank("As Kd Qh Jc 9s").category(), HandCategory::HighCard);
        assert_eq!(rank("As Ad Kh Qc Js").category(), HandCategory::OnePair);
        assert_eq!(rank("As Ad Kh Kc Js").category(), HandCategory::TwoPair);
        assert_eq!(rank("As Ad Ah Kc Js").category(), HandCategory::ThreeOfAKind);
        assert_eq!(rank("Ts 9d 8h 7c 6s").category(), HandCategory::Straight);
        assert_eq!(rank("5s 4d 3h 2c As").category(), HandCategory::Straight);
        assert_eq!(rank("As Ks 9s 7s 2s").category(), HandCategory::Flush);
        assert_eq!(rank("As Ad Ah Kc Kd").category(), HandCategory::FullHouse);
        assert_eq!(rank("As Ad Ah Ac Ks").category(), HandCategory::FourOfAKind);
        assert_eq!(rank("9s 8s 7s 6s 5s").category(), HandCategory::StraightFlush);
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        assert!(rank("6s 5d 4h 3c 2s") > rank("5s 4d 3h 2c As"));
        assert!(rank("As Kd Qh Jc Ts") > rank("Ks Qd Jh Tc 9s"));
    }

    #[test]
    fn test_kickers_break_ties() {
        assert!(rank("As Ad Kh Qc Js") > rank("As Ad Kh Qc Ts"));
        assert!(rank("Ks Kd 4h 4c Ad") > rank("Ks Kd 4h 4c Qd"));
        assert_eq!(rank("As Ad Kh Qc Js"), rank("Ah Ac Kd Qs Jd"));
    }

    #[test]
    fn test_seven_card_best_hand() {
        assert_eq!(rank("Ah As Ad Ac Kh Qs Jd").category(), HandCategory::FourOfAKind);
        // Board straight beats the pocket pair
        assert_eq!(rank("2h 2s 9d Tc Jh Qs Kd").category(), HandCategory::Straight);
        // Flush found among seven cards with mixed suits
        assert_eq!(rank("Ah 2h 9h Tc Jh Qs 4h").category(), HandCategory::Flush);
    }

    #[test]
    fn test_six_card_evaluation() {
        assert_eq!(rank("Ah Ad Kc Ks 7d 2c").category(), HandCategory::TwoPair);
        assert_eq!(rank("9s 8s 7s 6s 5s Ad").category(), HandCategory::StraightFlush);
    }

    #[test]
    fn test_two_trips_make_full_house() {
        let r = rank("Ah Ad As Kc Kd Ks 2c");
        assert_eq!(r.category(), HandCategory::FullHouse);
        assert!(r > rank("Ah Ad As Qc Qd Qs 2c"));
    }

    #[test]
    fn test_board_plays_is_a_tie() {
        let board: [Card; 5] = cards("As Ks Qs Js Ts").try_into().unwrap();
        let eval = HandEvaluator::new();
        let a = eval.evaluate_7([cards("2c")[0], cards("3d")[0]], &board);
        let b = eval.evaluate_7([cards("7h")[0], cards("8h")[0]], &board);
        assert_eq!(a, b);
    }

    #[test]
    fn test_kicker_order_within_groups() {
        // high card and flush keep every rank, highest first
        assert!(rank("Ks Qd 9h 5c 3s") > rank("Ks Qd 9h 5c 2s"));
        assert!(rank("Ah Jh 8h 4h 3h") > rank("Ah Jh 8h 4h 2h"));
        // two pair orders the pairs, then the kicker
        assert!(rank("9s 9d 3h 3c Ks") > rank("8s 8d 7h 7c As"));
        assert!(rank("9s 9d 3h 3c Ks") > rank("9h 9c 3d 3s Qs"));
        // quads kicker
        assert!(rank("7s 7d 7h 7c Ks") > rank("7s 7d 7h 7c Qs"));
    }

    #[test]
    fn test_card_count_errors() {
        let eval = HandEvaluator::new();
        assert_eq!(eval.evaluate_cards(&cards("As Ks Qs Js")), Err(EvalError::CardCount(4)));
        assert_eq!(
            eval.evaluate_cards(&cards("As Ks Qs Js Ts 9s 8s 7s")),
            Err(EvalError::CardCount(8))
        );
    }
}
