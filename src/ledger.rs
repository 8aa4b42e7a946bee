//! A session bound to persistent storage.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ExportError, LedgerError, StorageError};
use crate::export::{Delivery, deliver, export_tsv};
use crate::options::LedgerOptions;
use crate::session::{PendingHand, Session};
use crate::sink::ExportSink;
use crate::storage::{Storage, load_hands, save_hands};

/// A [`Session`] that is written to storage after every accepted hand.
///
/// Operations either complete or leave the session as it was: a hand is only
/// appended once the hand list including it has been persisted.
#[derive(Debug)]
pub struct Ledger<S> {
    session: Session,
    storage: S,
    options: LedgerOptions,
}

impl<S: Storage> Ledger<S> {
    /// Opens the ledger, rehydrating hands persisted under the configured key.
    ///
    /// Missing or corrupt persisted state yields an empty session.
    pub fn open(storage: S, options: LedgerOptions) -> Self {
        let hands = load_hands(&storage, options.storage_key);
        log::info!(
            "opened session `{}` with {} hands",
            options.storage_key,
            hands.len()
        );
        let session =
            Session::from_hands(hands, options.deck_count).with_blackjack_pays(options.blackjack_pays);

        Self {
            session,
            storage,
            options,
        }
    }

    /// Returns the session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the options the ledger was opened with.
    pub const fn options(&self) -> &LedgerOptions {
        &self.options
    }

    /// Returns the storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Creates an empty entry with the configured default bet.
    pub fn new_entry(&self) -> PendingHand {
        PendingHand::new(self.options.default_bet)
    }

    /// Validates the entry, persists the ledger with the new hand and appends
    /// it. On success the entry's selection is cleared and the new id returned.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Submit`] for an incomplete entry and
    /// [`LedgerError::Storage`] if persisting fails. The session and the entry
    /// are untouched on error.
    pub fn submit(&mut self, pending: &mut PendingHand) -> Result<u32, LedgerError> {
        let hand = self.session.prepare(pending)?;

        let mut hands: Vec<_> = self.session.hands().to_vec();
        hands.push(hand.clone());
        save_hands(&mut self.storage, self.options.storage_key, &hands).inspect_err(|err| {
            log::warn!("hand {} not recorded: {err}", hand.id);
        })?;

        let id = self.session.commit(hand);
        pending.clear_selection();
        Ok(id)
    }

    /// Records a card seen outside any hand. Seen cards are kept in memory only.
    pub fn observe(&mut self, card: Card) {
        self.session.observe(card);
    }

    /// Sets the number of decks used by the count.
    pub const fn set_deck_count(&mut self, deck_count: u32) {
        self.session.set_deck_count(deck_count);
    }

    /// Clears persisted state, then the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be removed; the session
    /// is kept in that case.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.storage.remove(self.options.storage_key)?;
        self.session.reset();
        Ok(())
    }

    /// Renders the ledger as tab-separated text.
    pub fn export(&self) -> String {
        export_tsv(&self.session)
    }

    /// Renders the ledger and delivers it, falling back if the primary sink
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns an error if neither sink accepts the export.
    pub fn copy_export<P, F>(&self, primary: &mut P, fallback: &mut F) -> Result<Delivery, ExportError>
    where
        P: ExportSink + ?Sized,
        F: ExportSink + ?Sized,
    {
        deliver(&self.export(), primary, fallback)
    }
}
