//! Betting actions returned to the game.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One decision. Amounts are chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "UPPERCASE")]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass without betting.
    Check,
    /// Match the outstanding bet.
    Call(u64),
    /// Bet or raise by the given amount.
    Raise(u64),
}

impl Action {
    /// Chips attached to the action; 0 for fold and check.
    pub fn amount(&self) -> u64 {
        match self {
            Action::Fold | Action::Check => 0,
            Action::Call(amount) | Action::Raise(amount) => *amount,
        }
    }

    /// Short name as the game protocol spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Check => "CHECK",
            Action::Call(_) => "CALL",
            Action::Raise(_) => "RAISE",
        }
    }

    /// Check if this is an aggressive action.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Raise(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.amount())
    }
}
