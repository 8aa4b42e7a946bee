//! A blackjack hand ledger with optional `no_std` support.
//!
//! Hands are logged by the player as they were observed at the table. The crate
//! scores them, keeps a Hi-Lo count over every card seen, settles each hand into
//! a profit and a categorical tag, and folds the whole session into bankroll
//! statistics and a tab-separated export.
//!
//! # Example
//!
//! ```
//! use bjledger::{Card, Decimal, Decision, Ledger, LedgerOptions, MemoryStorage, Outcome, PendingHand};
//!
//! let options = LedgerOptions::default();
//! let mut ledger = Ledger::open(MemoryStorage::new(), options);
//!
//! let mut pending = PendingHand::new(Decimal::from(10));
//! pending.add_player_card(Card::Ace);
//! pending.add_player_card(Card::King);
//! pending.add_dealer_card(Card::Nine);
//! pending.set_decision(Decision::Blackjack);
//! pending.set_result(Outcome::Win);
//!
//! let id = ledger.submit(&mut pending).unwrap();
//! assert_eq!(id, 1);
//! assert_eq!(ledger.session().stats().total_profit, Decimal::from(15));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod export;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod outcome;
pub mod session;
pub mod settlement;
pub mod sink;
pub mod storage;

// Re-export main types
pub use card::{Card, DECK_SIZE};
pub use count::{CountIndex, count_cards};
pub use error::{ExportError, LedgerError, ParseError, SinkError, StorageError, SubmitError};
pub use export::{Delivery, deliver, export_tsv};
pub use hand::{is_bust, is_soft, score};
pub use ledger::Ledger;
pub use options::LedgerOptions;
pub use outcome::{Decision, Outcome};
pub use session::{MAX_AMOUNT, MAX_AMOUNT_SCALE, PendingHand, RecordedHand, Session, SessionStats};
pub use settlement::{BLACKJACK_PAYS, Settlement, SettlementTag, settle, settle_with};
pub use sink::{ExportSink, MemorySink};
pub use storage::{MemoryStorage, Storage};

pub use rust_decimal::Decimal;

#[cfg(feature = "std")]
pub use sink::{CommandSink, WriterSink};
#[cfg(feature = "std")]
pub use storage::FileStorage;
