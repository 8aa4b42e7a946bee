//! Tab-separated export of the ledger and its delivery.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ExportError;
use crate::outcome::Outcome;
use crate::session::{RecordedHand, Session};
use crate::settlement::Settlement;
use crate::sink::ExportSink;

/// Which sink ended up receiving an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The primary sink (usually the clipboard) accepted the text.
    Primary,
    /// The primary sink failed and the fallback accepted the text.
    Fallback,
}

/// Formats one export line:
/// `effective bet, profit, decision label, player total, dealer total, tag`.
///
/// The decision label reads `Push` for pushed hands.
fn format_line(hand: &RecordedHand, settlement: &Settlement) -> String {
    let label = if hand.result == Outcome::Push {
        Outcome::Push.label()
    } else {
        hand.decision.label()
    };

    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        settlement.effective_bet.normalize(),
        settlement.profit.normalize(),
        label,
        hand.player_total(),
        hand.dealer_total(),
        settlement.tag.code(),
    )
}

/// Renders the session as tab-separated lines, one per hand in ledger order,
/// joined with `\n`.
#[must_use]
pub fn export_tsv(session: &Session) -> String {
    session
        .hands()
        .iter()
        .zip(session.settlements())
        .map(|(hand, settlement)| format_line(hand, &settlement))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Delivers `text` to `primary`, falling back to `fallback` if it fails.
///
/// # Errors
///
/// Returns [`ExportError::AllSinksFailed`] if neither sink accepts the text.
pub fn deliver<P, F>(text: &str, primary: &mut P, fallback: &mut F) -> Result<Delivery, ExportError>
where
    P: ExportSink + ?Sized,
    F: ExportSink + ?Sized,
{
    let primary_err = match primary.deliver(text) {
        Ok(()) => return Ok(Delivery::Primary),
        Err(err) => err,
    };

    log::warn!(
        "export to {} failed ({primary_err}), trying {}",
        primary.name(),
        fallback.name()
    );

    fallback
        .deliver(text)
        .map(|()| Delivery::Fallback)
        .map_err(|fallback_err| ExportError::AllSinksFailed {
            primary: primary_err,
            fallback: fallback_err,
        })
}
