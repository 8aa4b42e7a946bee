//! Error types for ledger operations.

use alloc::string::String;

use thiserror::Error;

/// Reasons a pending hand is rejected on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No player cards were entered.
    #[error("no player cards entered")]
    MissingPlayerCards,
    /// No dealer cards were entered.
    #[error("no dealer cards entered")]
    MissingDealerCards,
    /// No bet amount was entered.
    #[error("no bet amount entered")]
    MissingBet,
    /// Bet amount is zero or negative.
    #[error("bet amount must be positive")]
    NonPositiveBet,
    /// Cashout amount is negative.
    #[error("cashout amount must not be negative")]
    NegativeCashout,
    /// An amount exceeds the ledger's maximum or carries too many decimal places.
    #[error("amount out of range")]
    AmountOutOfRange,
    /// No decision was selected.
    #[error("no decision selected")]
    MissingDecision,
    /// No result was selected.
    #[error("no result selected")]
    MissingResult,
    /// Every hand id has been used.
    #[error("no hand id left in this session")]
    IdsExhausted,
}

/// Errors that can occur while parsing user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a card rank.
    #[error("invalid card rank")]
    InvalidCard,
    /// Not a decision label.
    #[error("invalid decision")]
    InvalidDecision,
    /// Not an outcome label.
    #[error("invalid result")]
    InvalidOutcome,
    /// Not a decimal amount.
    #[error("invalid amount")]
    InvalidAmount,
}

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend failed to read, write or remove a key.
    #[error("storage backend failed: {0}")]
    Backend(String),
    /// The hand list could not be encoded.
    #[error("failed to encode hands: {0}")]
    Encode(String),
}

/// Errors raised by an export sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The sink is not available on this system.
    #[error("export sink unavailable")]
    Unavailable,
    /// The sink accepted the text but failed to deliver it.
    #[error("export sink failed: {0}")]
    Failed(String),
}

/// Errors that can occur while delivering an export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Both the primary and the fallback sink failed.
    #[error("export could not be delivered (primary: {primary}; fallback: {fallback})")]
    AllSinksFailed {
        /// Failure of the primary sink.
        primary: SinkError,
        /// Failure of the fallback sink.
        fallback: SinkError,
    },
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The pending hand was rejected.
    #[error(transparent)]
    Submit(#[from] SubmitError),
    /// The session could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
