//! Session state: the append-only hand list and the seen-card list.

use alloc::vec::Vec;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::count::{CountIndex, count_cards};
use crate::error::SubmitError;
use crate::outcome::{Decision, Outcome};
use crate::settlement::{BLACKJACK_PAYS, Settlement, settle_with};

mod stats;
mod submit;

pub use stats::SessionStats;
pub use submit::PendingHand;

/// Largest bet or cashout a hand may carry (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Most decimal places a bet or cashout may carry.
pub const MAX_AMOUNT_SCALE: u32 = 8;

fn in_range(amount: Decimal) -> bool {
    amount <= MAX_AMOUNT && amount.normalize().scale() <= MAX_AMOUNT_SCALE
}

/// Checks a bet and a cashout amount against the ledger's limits.
///
/// Bounding both keeps every settlement, total and ratio of a session well
/// inside `Decimal`'s range.
pub(crate) fn check_amounts(bet: Decimal, cashout: Decimal) -> Result<(), SubmitError> {
    if bet <= Decimal::ZERO {
        return Err(SubmitError::NonPositiveBet);
    }
    if cashout < Decimal::ZERO {
        return Err(SubmitError::NegativeCashout);
    }
    if !in_range(bet) || !in_range(cashout) {
        return Err(SubmitError::AmountOutOfRange);
    }
    Ok(())
}

/// A hand as recorded in the ledger.
///
/// Serializes to the persisted shape
/// `{"id":1,"player":"A K","dealer":"9 7","bet":"10","cashout":"0","decision":"Stand","result":"Win"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedHand {
    /// Session-unique id, strictly increasing in ledger order.
    pub id: u32,
    /// Player cards, in the order they were dealt.
    #[serde(rename = "player", with = "card_text")]
    pub player_cards: Vec<Card>,
    /// Dealer cards, in the order they were dealt.
    #[serde(rename = "dealer", with = "card_text")]
    pub dealer_cards: Vec<Card>,
    /// Original stake.
    pub bet: Decimal,
    /// Cashout proceeds, only meaningful for [`Decision::Cashout`].
    #[serde(default)]
    pub cashout: Decimal,
    /// Decision taken.
    pub decision: Decision,
    /// Result of the hand.
    pub result: Outcome,
}

impl RecordedHand {
    /// Returns the player's total.
    #[must_use]
    pub fn player_total(&self) -> u32 {
        crate::hand::score(&self.player_cards)
    }

    /// Returns the dealer's total.
    #[must_use]
    pub fn dealer_total(&self) -> u32 {
        crate::hand::score(&self.dealer_cards)
    }

    /// Checks the hand against the rules a submission must satisfy.
    ///
    /// # Errors
    ///
    /// Returns the first rule the hand breaks.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.player_cards.is_empty() {
            return Err(SubmitError::MissingPlayerCards);
        }
        if self.dealer_cards.is_empty() {
            return Err(SubmitError::MissingDealerCards);
        }
        check_amounts(self.bet, self.cashout)
    }

    /// Iterates over the player cards followed by the dealer cards.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.player_cards.iter().chain(self.dealer_cards.iter())
    }
}

/// Space-separated rank labels, the persisted form of a card sequence.
mod card_text {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::card::Card;

    pub fn serialize<S: Serializer>(cards: &[Card], serializer: S) -> Result<S::Ok, S::Error> {
        let mut text = String::new();
        for (index, card) in cards.iter().enumerate() {
            if index > 0 {
                text.push(' ');
            }
            text.push_str(card.label());
        }
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Card>, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.split_whitespace()
            .map(|label| {
                label
                    .parse::<Card>()
                    .map_err(|_| D::Error::custom(alloc::format!("invalid card rank `{label}`")))
            })
            .collect()
    }
}

/// A logging session.
///
/// The session exclusively owns its hands and seen cards. Hands are only ever
/// appended; the whole session can be reset.
#[derive(Debug, Clone)]
pub struct Session {
    /// Recorded hands, in submission order.
    hands: Vec<RecordedHand>,
    /// Cards seen on the table outside any recorded hand.
    seen: Vec<Card>,
    /// Decks in the shoe.
    deck_count: u32,
    /// Win ratio for a blackjack.
    blackjack_pays: Decimal,
    /// Id assigned to the next appended hand, `None` once ids run out.
    next_id: Option<u32>,
}

impl Session {
    /// Creates an empty session for a shoe of `deck_count` decks.
    #[must_use]
    pub const fn new(deck_count: u32) -> Self {
        Self {
            hands: Vec::new(),
            seen: Vec::new(),
            deck_count,
            blackjack_pays: BLACKJACK_PAYS,
            next_id: Some(1),
        }
    }

    /// Rehydrates a session from persisted hands.
    ///
    /// The next id continues after the largest id found. A session whose
    /// largest id is `u32::MAX` accepts no further hands.
    #[must_use]
    pub fn from_hands(hands: Vec<RecordedHand>, deck_count: u32) -> Self {
        let next_id = hands
            .iter()
            .map(|hand| hand.id)
            .max()
            .map_or(Some(1), |id| id.checked_add(1));
        Self {
            hands,
            next_id,
            ..Self::new(deck_count)
        }
    }

    /// Sets the win ratio applied to blackjacks.
    #[must_use]
    pub fn with_blackjack_pays(mut self, ratio: Decimal) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Returns the recorded hands.
    #[must_use]
    pub fn hands(&self) -> &[RecordedHand] {
        &self.hands
    }

    /// Returns the number of recorded hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Returns whether no hand has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Returns the cards seen outside recorded hands.
    #[must_use]
    pub fn seen_cards(&self) -> &[Card] {
        &self.seen
    }

    /// Records a card seen on the table that belongs to no recorded hand.
    pub fn observe(&mut self, card: Card) {
        log::debug!("observed card {card}");
        self.seen.push(card);
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn deck_count(&self) -> u32 {
        self.deck_count
    }

    /// Sets the number of decks in the shoe.
    pub const fn set_deck_count(&mut self, deck_count: u32) {
        self.deck_count = deck_count;
    }

    /// Returns the win ratio applied to blackjacks.
    #[must_use]
    pub const fn blackjack_pays(&self) -> Decimal {
        self.blackjack_pays
    }

    /// Returns the id the next appended hand will get, or `None` if every id
    /// has been used.
    #[must_use]
    pub const fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    /// Iterates over every observed card: each hand's player then dealer
    /// cards in ledger order, followed by the seen cards.
    pub fn observed_cards(&self) -> impl Iterator<Item = &Card> {
        self.hands
            .iter()
            .flat_map(RecordedHand::cards)
            .chain(self.seen.iter())
    }

    /// Computes the Hi-Lo count over every observed card.
    #[must_use]
    pub fn count(&self) -> CountIndex {
        count_cards(self.observed_cards(), self.deck_count)
    }

    /// Settles every hand, in ledger order.
    pub fn settlements(&self) -> impl Iterator<Item = Settlement> + '_ {
        self.hands
            .iter()
            .map(|hand| settle_with(hand, self.blackjack_pays))
    }

    /// Clears hands and seen cards and restarts ids at 1.
    pub fn reset(&mut self) {
        log::info!("resetting session ({} hands)", self.hands.len());
        self.hands.clear();
        self.seen.clear();
        self.next_id = Some(1);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_DECK_COUNT)
    }
}
