//! Player decisions and hand outcomes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The decision recorded for a hand.
///
/// Any decision may be paired with any [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Player stood.
    Stand,
    /// Player took a cashout offer.
    Cashout,
    /// Player doubled down.
    Double,
    /// Player split.
    Split,
    /// Player had a blackjack.
    Blackjack,
}

impl Decision {
    /// Every decision, in the order the entry form lists them.
    pub const ALL: [Self; 5] = [
        Self::Stand,
        Self::Cashout,
        Self::Double,
        Self::Split,
        Self::Blackjack,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stand => "Stand",
            Self::Cashout => "Cashout",
            Self::Double => "Double",
            Self::Split => "Split",
            Self::Blackjack => "Blackjack",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Decision {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|decision| decision.label().eq_ignore_ascii_case(s))
            .ok_or(ParseError::InvalidDecision)
    }
}

/// The result of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won.
    Win,
    /// Player lost.
    Lose,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Every outcome, in the order the entry form lists them.
    pub const ALL: [Self; 3] = [Self::Win, Self::Lose, Self::Push];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Push => "Push",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Outcome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.label().eq_ignore_ascii_case(s))
            .ok_or(ParseError::InvalidOutcome)
    }
}
