//! Settlement of a recorded hand.
//!
//! Profit follows the proceeds convention: a push returns the effective stake,
//! a cashout returns the cashout amount, a win returns the effective stake (a
//! blackjack returns the bet times the blackjack ratio) and a loss returns
//! nothing. Net results come from comparing totals against the amount staked.

use core::fmt;

use rust_decimal::Decimal;

use crate::outcome::{Decision, Outcome};
use crate::session::RecordedHand;

/// Default win ratio applied to a hand recorded as [`Decision::Blackjack`].
pub const BLACKJACK_PAYS: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Short categorical code for a settled hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementTag {
    /// The hand pushed, whatever the decision.
    Push,
    /// Doubled and won.
    DoubleWin,
    /// Doubled and lost.
    DoubleLose,
    /// Cashed out on a hand recorded as won.
    CashoutWin,
    /// Cashed out on a hand recorded as lost.
    CashoutLose,
    /// Blackjack.
    Blackjack,
    /// Plain win.
    Win,
    /// Plain loss.
    Lose,
}

impl SettlementTag {
    /// Returns the export code (`push`, `ddw`, `ddl`, `cow`, `col`, `bj`, `win`, `los`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::DoubleWin => "ddw",
            Self::DoubleLose => "ddl",
            Self::CashoutWin => "cow",
            Self::CashoutLose => "col",
            Self::Blackjack => "bj",
            Self::Win => "win",
            Self::Lose => "los",
        }
    }

    /// Picks the tag for a decision and result.
    ///
    /// Push takes precedence over every decision, then double, cashout and
    /// blackjack, then the plain result.
    #[must_use]
    pub const fn classify(decision: Decision, result: Outcome) -> Self {
        match (decision, result) {
            (_, Outcome::Push) => Self::Push,
            (Decision::Double, Outcome::Win) => Self::DoubleWin,
            (Decision::Double, Outcome::Lose) => Self::DoubleLose,
            (Decision::Cashout, Outcome::Win) => Self::CashoutWin,
            (Decision::Cashout, Outcome::Lose) => Self::CashoutLose,
            (Decision::Blackjack, _) => Self::Blackjack,
            (_, Outcome::Win) => Self::Win,
            (_, Outcome::Lose) => Self::Lose,
        }
    }
}

impl fmt::Display for SettlementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Monetary result of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Stake at risk after the decision multiplier.
    pub effective_bet: Decimal,
    /// Proceeds returned to the player, stake included.
    pub profit: Decimal,
    /// Categorical tag.
    pub tag: SettlementTag,
}

impl Settlement {
    /// Proceeds minus the effective stake.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.profit - self.effective_bet
    }
}

/// Settles a hand with the default blackjack ratio of 1.5.
#[must_use]
pub fn settle(hand: &RecordedHand) -> Settlement {
    settle_with(hand, BLACKJACK_PAYS)
}

/// Settles a hand, paying `blackjack_pays` times the bet on a blackjack win.
///
/// Rules apply in order: a push returns the effective bet, a cashout returns
/// the cashout amount, a win returns the effective bet (or the blackjack
/// payout), and a loss returns zero. Products saturate at the bounds of
/// `Decimal`.
#[must_use]
pub fn settle_with(hand: &RecordedHand, blackjack_pays: Decimal) -> Settlement {
    let bet = hand.bet;
    let effective_bet = if hand.decision == Decision::Double {
        bet.saturating_mul(Decimal::TWO)
    } else {
        bet
    };

    let profit = match (hand.result, hand.decision) {
        (Outcome::Push, _) => effective_bet,
        (_, Decision::Cashout) => hand.cashout,
        (Outcome::Win, Decision::Blackjack) => bet.saturating_mul(blackjack_pays),
        (Outcome::Win, Decision::Double) => effective_bet,
        (Outcome::Win, _) => effective_bet,
        (Outcome::Lose, _) => Decimal::ZERO,
    };

    Settlement {
        effective_bet: effective_bet.normalize(),
        profit: profit.normalize(),
        tag: SettlementTag::classify(hand.decision, hand.result),
    }
}
