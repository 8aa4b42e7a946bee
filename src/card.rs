//! Card ranks and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// A card rank as entered at the table. Suits are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Card {
    /// Every rank, in the order the entry form lists them.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank label (`"A"`, `"2"` .. `"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the blackjack value of the card, counting an ace as 11.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the Hi-Lo contribution of the card.
    ///
    /// Low cards (2 through 6) count +1, tens, faces and aces count -1 and
    /// 7 through 9 are neutral.
    #[must_use]
    pub const fn hi_lo(self) -> i32 {
        match self {
            Self::Two | Self::Three | Self::Four | Self::Five | Self::Six => 1,
            Self::Seven | Self::Eight | Self::Nine => 0,
            Self::Ten | Self::Jack | Self::Queen | Self::King | Self::Ace => -1,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|card| card.label().eq_ignore_ascii_case(s))
            .ok_or(ParseError::InvalidCard)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
