//! Card model: cards, hole cards, board, deck, evaluator and draw checks.

pub mod card;
pub mod draws;
pub mod hand_eval;

pub use card::{Board, Card, CardParseError, Deck, HoleCards, Street};
pub use draws::has_strong_draw;
pub use hand_eval::{EvalError, HandCategory, HandEvaluator, HandRank};
