//! Hand totals under blackjack rules.

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Scores a sequence of cards.
///
/// Every ace starts at 11 and is downgraded to 1, one at a time, only while the
/// total is over 21. An empty sequence scores 0. Totals above 21 are returned
/// as-is.
///
/// ```
/// use bjledger::{Card, score};
///
/// assert_eq!(score(&[Card::Ace, Card::Ace, Card::Nine]), 21);
/// assert_eq!(score(&[Card::King, Card::Queen, Card::Two]), 22);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Returns whether the hand is soft (contains an ace still counted as 11).
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the hand is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > 21
}
