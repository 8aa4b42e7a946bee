use alloc::vec::Vec;
use core::str::FromStr;

use rust_decimal::Decimal;

use crate::card::Card;
use crate::error::{ParseError, SubmitError};
use crate::hand::score;
use crate::outcome::{Decision, Outcome};

use super::{RecordedHand, Session, check_amounts};

/// A hand being entered, not yet part of the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingHand {
    player_cards: Vec<Card>,
    dealer_cards: Vec<Card>,
    bet: Option<Decimal>,
    cashout: Option<Decimal>,
    decision: Option<Decision>,
    result: Option<Outcome>,
}

/// Parses an amount typed by the user. Blank input means "not entered".
fn parse_amount(text: &str) -> Result<Option<Decimal>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(text)
        .map(Some)
        .map_err(|_| ParseError::InvalidAmount)
}

impl PendingHand {
    /// Creates an empty entry with the given bet pre-filled.
    #[must_use]
    pub fn new(bet: Decimal) -> Self {
        Self {
            bet: Some(bet),
            ..Self::default()
        }
    }

    /// Adds a card to the player's hand.
    pub fn add_player_card(&mut self, card: Card) {
        self.player_cards.push(card);
    }

    /// Adds a card to the dealer's hand.
    pub fn add_dealer_card(&mut self, card: Card) {
        self.dealer_cards.push(card);
    }

    /// Removes and returns the player card at `index`.
    pub fn remove_player_card(&mut self, index: usize) -> Option<Card> {
        (index < self.player_cards.len()).then(|| self.player_cards.remove(index))
    }

    /// Removes and returns the dealer card at `index`.
    pub fn remove_dealer_card(&mut self, index: usize) -> Option<Card> {
        (index < self.dealer_cards.len()).then(|| self.dealer_cards.remove(index))
    }

    /// Returns the player cards entered so far.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }

    /// Returns the dealer cards entered so far.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }

    /// Returns the running player total.
    #[must_use]
    pub fn player_total(&self) -> u32 {
        score(&self.player_cards)
    }

    /// Returns the running dealer total.
    #[must_use]
    pub fn dealer_total(&self) -> u32 {
        score(&self.dealer_cards)
    }

    /// Sets the bet amount.
    pub const fn set_bet(&mut self, bet: Decimal) {
        self.bet = Some(bet);
    }

    /// Clears the bet amount.
    pub const fn clear_bet(&mut self) {
        self.bet = None;
    }

    /// Sets the bet from user text. Blank text clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAmount`] if the text is not a number; the
    /// current bet is kept.
    pub fn set_bet_text(&mut self, text: &str) -> Result<(), ParseError> {
        self.bet = parse_amount(text)?;
        Ok(())
    }

    /// Returns the bet amount, if entered.
    #[must_use]
    pub const fn bet(&self) -> Option<Decimal> {
        self.bet
    }

    /// Sets the cashout amount.
    pub const fn set_cashout(&mut self, cashout: Decimal) {
        self.cashout = Some(cashout);
    }

    /// Sets the cashout from user text. Blank text clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAmount`] if the text is not a number; the
    /// current cashout is kept.
    pub fn set_cashout_text(&mut self, text: &str) -> Result<(), ParseError> {
        self.cashout = parse_amount(text)?;
        Ok(())
    }

    /// Returns the cashout amount, if entered.
    #[must_use]
    pub const fn cashout(&self) -> Option<Decimal> {
        self.cashout
    }

    /// Selects the decision.
    pub const fn set_decision(&mut self, decision: Decision) {
        self.decision = Some(decision);
    }

    /// Returns the selected decision.
    #[must_use]
    pub const fn decision(&self) -> Option<Decision> {
        self.decision
    }

    /// Selects the result.
    pub const fn set_result(&mut self, result: Outcome) {
        self.result = Some(result);
    }

    /// Returns the selected result.
    #[must_use]
    pub const fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// Clears everything except the bet, ready for the next entry.
    pub fn clear_selection(&mut self) {
        self.player_cards.clear();
        self.dealer_cards.clear();
        self.cashout = None;
        self.decision = None;
        self.result = None;
    }

    /// Checks the entry and builds the hand it would record under `id`.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid field.
    pub fn to_recorded(&self, id: u32) -> Result<RecordedHand, SubmitError> {
        if self.player_cards.is_empty() {
            return Err(SubmitError::MissingPlayerCards);
        }
        if self.dealer_cards.is_empty() {
            return Err(SubmitError::MissingDealerCards);
        }
        let bet = self.bet.ok_or(SubmitError::MissingBet)?;
        let cashout = self.cashout.unwrap_or(Decimal::ZERO);
        check_amounts(bet, cashout)?;
        let decision = self.decision.ok_or(SubmitError::MissingDecision)?;
        let result = self.result.ok_or(SubmitError::MissingResult)?;

        Ok(RecordedHand {
            id,
            player_cards: self.player_cards.clone(),
            dealer_cards: self.dealer_cards.clone(),
            bet,
            cashout,
            decision,
            result,
        })
    }
}

impl Session {
    /// Builds the hand `pending` would append, without touching the session.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the entry is incomplete or invalid, or if
    /// the session has no id left.
    pub fn prepare(&self, pending: &PendingHand) -> Result<RecordedHand, SubmitError> {
        self.next_id
            .ok_or(SubmitError::IdsExhausted)
            .and_then(|id| pending.to_recorded(id))
            .inspect_err(|err| {
                log::debug!("rejected submission: {err}");
            })
    }

    /// Appends a hand produced by [`Session::prepare`] and advances the id
    /// counter.
    pub(crate) fn commit(&mut self, hand: RecordedHand) -> u32 {
        let id = hand.id;
        log::debug!(
            "recorded hand {id}: {} / {} bet {}",
            hand.decision,
            hand.result,
            hand.bet
        );
        self.next_id = id.checked_add(1);
        self.hands.push(hand);
        id
    }

    /// Validates and appends the pending hand, then clears its selection.
    ///
    /// Returns the id assigned to the new hand.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the entry is incomplete or invalid.
    /// Neither the session nor the entry is modified in that case.
    pub fn append(&mut self, pending: &mut PendingHand) -> Result<u32, SubmitError> {
        let hand = self.prepare(pending)?;
        let id = self.commit(hand);
        pending.clear_selection();
        Ok(id)
    }
}
