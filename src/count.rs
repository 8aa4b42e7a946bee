//! Hi-Lo running and true count over the observed cards.

use crate::card::{Card, DECK_SIZE};

/// Snapshot of the Hi-Lo count for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountIndex {
    /// Sum of the Hi-Lo contributions of every observed card.
    pub running_count: i32,
    /// Running count per remaining deck.
    ///
    /// `None` when the estimated number of remaining decks is zero or negative.
    pub true_count: Option<f64>,
    /// Number of cards the count was computed over.
    pub observed: usize,
    /// Estimated decks already dealt, never less than one.
    pub decks_consumed: f64,
}

impl CountIndex {
    /// Returns the count of a shoe with no cards observed.
    #[must_use]
    pub fn fresh(deck_count: u32) -> Self {
        count_cards(core::iter::empty(), deck_count)
    }

    /// Estimated decks left in the shoe.
    #[must_use]
    pub fn decks_remaining(&self, deck_count: u32) -> f64 {
        f64::from(deck_count) - self.decks_consumed
    }
}

/// Computes the Hi-Lo count over the given cards.
///
/// Decks consumed is the number of observed cards divided by 52, floored at
/// one deck. The true count divides the running count by the decks left in a
/// shoe of `deck_count` decks and is unavailable when no deck is left.
///
/// ```
/// use bjledger::{Card, count_cards};
///
/// let index = count_cards(&[Card::Two, Card::King], 6);
/// assert_eq!(index.running_count, 0);
/// assert_eq!(index.true_count, Some(0.0));
/// ```
pub fn count_cards<'a, I>(cards: I, deck_count: u32) -> CountIndex
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut running_count = 0;
    let mut observed = 0;

    for card in cards {
        running_count += card.hi_lo();
        observed += 1;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let dealt = observed as f64 / DECK_SIZE as f64;
    let decks_consumed = if dealt < 1.0 { 1.0 } else { dealt };

    let remaining = f64::from(deck_count) - decks_consumed;
    let true_count = (remaining > 0.0).then(|| f64::from(running_count) / remaining);

    CountIndex {
        running_count,
        true_count,
        observed,
        decks_consumed,
    }
}
