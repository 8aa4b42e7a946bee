//! Ledger configuration options.

use rust_decimal::Decimal;

use crate::settlement::BLACKJACK_PAYS;

/// Default number of decks in the shoe.
pub const DEFAULT_DECK_COUNT: u32 = 6;

/// Default storage key for the persisted hand list.
pub const DEFAULT_STORAGE_KEY: &str = "blackjack_hands";

/// Configuration options for a ledger.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjledger::{Decimal, LedgerOptions};
///
/// let options = LedgerOptions::default()
///     .with_deck_count(8)
///     .with_default_bet(Decimal::from(5))
///     .with_storage_key("table_7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerOptions {
    /// Number of 52-card decks in the shoe, used by the count.
    pub deck_count: u32,
    /// Bet pre-filled in a new entry.
    pub default_bet: Decimal,
    /// Key the hand list is persisted under.
    pub storage_key: &'static str,
    /// Win ratio applied to hands recorded as blackjack (typically 1.5).
    pub blackjack_pays: Decimal,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            deck_count: DEFAULT_DECK_COUNT,
            default_bet: Decimal::ONE,
            storage_key: DEFAULT_STORAGE_KEY,
            blackjack_pays: BLACKJACK_PAYS,
        }
    }
}

impl LedgerOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjledger::LedgerOptions;
    ///
    /// let options = LedgerOptions::default().with_deck_count(2);
    /// assert_eq!(options.deck_count, 2);
    /// ```
    #[must_use]
    pub const fn with_deck_count(mut self, deck_count: u32) -> Self {
        self.deck_count = deck_count;
        self
    }

    /// Sets the bet pre-filled in a new entry.
    ///
    /// # Example
    ///
    /// ```
    /// use bjledger::{Decimal, LedgerOptions};
    ///
    /// let options = LedgerOptions::default().with_default_bet(Decimal::from(25));
    /// assert_eq!(options.default_bet, Decimal::from(25));
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: Decimal) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the storage key.
    ///
    /// # Example
    ///
    /// ```
    /// use bjledger::LedgerOptions;
    ///
    /// let options = LedgerOptions::default().with_storage_key("session_b");
    /// assert_eq!(options.storage_key, "session_b");
    /// ```
    #[must_use]
    pub const fn with_storage_key(mut self, key: &'static str) -> Self {
        self.storage_key = key;
        self
    }

    /// Sets the blackjack win ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjledger::{Decimal, LedgerOptions};
    ///
    /// let six_to_five = Decimal::new(12, 1);
    /// let options = LedgerOptions::default().with_blackjack_pays(six_to_five);
    /// assert_eq!(options.blackjack_pays, six_to_five);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: Decimal) -> Self {
        self.blackjack_pays = ratio;
        self
    }
}
