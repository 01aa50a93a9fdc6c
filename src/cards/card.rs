//! Card representation.
//!
//! - `Card`: a single playing card with rank and suit
//! - `HoleCards`: the agent's two private cards
//! - `Board`: community cards (0, 3, 4 or 5 cards)
//! - `Deck`: the undealt remainder used by one simulation trial

use crate::policy::random::RandomSource;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rank of a card (0-12: 2-A).
pub const RANK_2: u8 = 0;
pub const RANK_3: u8 = 1;
pub const RANK_4: u8 = 2;
pub const RANK_5: u8 = 3;
pub const RANK_6: u8 = 4;
pub const RANK_7: u8 = 5;
pub const RANK_8: u8 = 6;
pub const RANK_9: u8 = 7;
pub const RANK_T: u8 = 8;
pub const RANK_J: u8 = 9;
pub const RANK_Q: u8 = 10;
pub const RANK_K: u8 = 11;
pub const RANK_A: u8 = 12;

/// Suit of a card (0-3).
pub const SUIT_CLUBS: u8 = 0;
pub const SUIT_DIAMONDS: u8 = 1;
pub const SUIT_HEARTS: u8 = 2;
pub const SUIT_SPADES: u8 = 3;

pub(crate) const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];
const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Error returned when card text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Text was not exactly two characters.
    #[error("card '{0}' must be two characters, e.g. 'As'")]
    Length(String),
    /// Unknown rank character.
    #[error("invalid rank '{0}'")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}'")]
    Suit(char),
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < 13, "rank must be 0-12");
        debug_assert!(suit < 4, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!(id < 52, "card id must be 0-51");
        Self { id }
    }

    /// The card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Rank index (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Suit index (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Face value with the ace high: 2..=14.
    #[inline]
    pub fn rank_value(&self) -> u8 {
        self.rank() + 2
    }

    /// Rank character for display.
    pub fn rank_char(&self) -> char {
        RANK_CHARS[self.rank() as usize]
    }

    /// Suit character for display.
    pub fn suit_char(&self) -> char {
        SUIT_CHARS[self.suit() as usize]
    }

    /// Parse a run of cards like "AhKsQd" or "Ah Ks Qd".
    pub fn parse_many(s: &str) -> Result<Vec<Card>, CardParseError> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();
        let chars: Vec<char> = compact.chars().collect();
        chars
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>().parse())
            .collect()
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parse a card from text like "As", "kh", "2C".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(CardParseError::Length(s.to_string()));
        }
        let rank = RANK_CHARS
            .iter()
            .position(|&c| c == chars[0].to_ascii_uppercase())
            .ok_or(CardParseError::Rank(chars[0]))?;
        let suit = SUIT_CHARS
            .iter()
            .position(|&c| c == chars[1].to_ascii_lowercase())
            .ok_or(CardParseError::Suit(chars[1]))?;
        Ok(Self::new(rank as u8, suit as u8))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The agent's two hole cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    /// First card (higher rank by convention).
    pub card1: Card,
    /// Second card.
    pub card2: Card,
}

impl HoleCards {
    /// Create hole cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Self {
        if card1.rank() >= card2.rank() {
            Self { card1, card2 }
        } else {
            Self {
                card1: card2,
                card2: card1,
            }
        }
    }

    /// Build from a slice; anything other than exactly two distinct cards is rejected.
    pub fn from_slice(cards: &[Card]) -> Option<Self> {
        match cards {
            [a, b] if a != b => Some(Self::new(*a, *b)),
            _ => None,
        }
    }

    /// Check if hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// Both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }
}

impl FromStr for HoleCards {
    type Err = CardParseError;

    /// Parse hole cards like "AhKs" or "Ah Ks".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = Card::parse_many(s)?;
        Self::from_slice(&cards).ok_or_else(|| CardParseError::Length(s.to_string()))
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Community cards on the board.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create a board from cards; [`Board::street`] tells whether the count is legal.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if board is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards on the board.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current street, or `None` for an impossible board size.
    pub fn street(&self) -> Option<Street> {
        match self.cards.len() {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl FromStr for Board {
    type Err = CardParseError;

    /// Parse a board like "AhKsQd"; the empty string is the preflop board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = Card::parse_many(s)?;
        if cards.len() > 5 {
            return Err(CardParseError::Length(s.to_string()));
        }
        Ok(Self::from_cards(cards))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Street in a poker hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    /// No community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

/// The undealt part of a 52-card deck.
#[derive(Clone)]
pub struct Deck {
    /// All 52 cards in current order.
    cards: [Card; 52],
    /// Index of next card to deal.
    index: usize,
    /// Number of usable cards (52 minus dead cards).
    size: usize,
}

impl Deck {
    /// Create a new deck in standard order.
    pub fn new() -> Self {
        Self::without(&[])
    }

    /// Create a deck with the dead cards removed.
    pub fn without(dead_cards: &[Card]) -> Self {
        let dead_mask = dead_cards.iter().fold(0u64, |mask, c| mask | (1u64 << c.id()));
        let mut cards = [Card::from_id(0); 52];
        let mut size = 0;
        for id in 0..52u8 {
            if dead_mask & (1u64 << id) == 0 {
                cards[size] = Card::from_id(id);
                size += 1;
            }
        }
        Self { cards, index: 0, size }
    }

    /// Shuffle the undealt cards.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle_cards(&mut self.cards[self.index..self.size]);
    }

    /// Deal `n` cards, or `None` (dealing nothing) if fewer than `n` remain.
    pub fn deal_n(&mut self, n: usize) -> Option<&[Card]> {
        if self.remaining() < n {
            return None;
        }
        let start = self.index;
        self.index += n;
        Some(&self.cards[start..self.index])
    }

    /// Number of undealt cards.
    pub fn remaining(&self) -> usize {
        self.size - self.index
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}
