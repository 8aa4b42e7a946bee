use rust_decimal::{Decimal, RoundingStrategy};

use super::Session;

/// Aggregate bankroll figures for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of recorded hands.
    pub hands: usize,
    /// Sum of effective bets.
    pub total_bet: Decimal,
    /// Sum of proceeds.
    pub total_profit: Decimal,
    /// Proceeds minus stakes.
    pub net_profit: Decimal,
    /// Proceeds as a percentage of stakes, one decimal place.
    pub return_to_player: Decimal,
    /// Proceeds per hand, two decimal places.
    pub avg_profit_per_hand: Decimal,
}

fn round_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

impl Session {
    /// Folds every hand's settlement into session totals.
    ///
    /// Sums and ratios saturate instead of overflowing.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        let (total_bet, total_profit) = self.settlements().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(bet, profit), settlement| {
                (
                    bet.saturating_add(settlement.effective_bet),
                    profit.saturating_add(settlement.profit),
                )
            },
        );

        let hands = self.hands.len();

        let return_to_player = if total_bet > Decimal::ZERO {
            let ratio = total_profit
                .checked_div(total_bet)
                .map_or(Decimal::MAX, |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED));
            round_half_up(ratio, 1)
        } else {
            Decimal::ZERO
        };

        let avg_profit_per_hand = if hands > 0 {
            round_half_up(total_profit / Decimal::from(hands), 2)
        } else {
            Decimal::ZERO
        };

        SessionStats {
            hands,
            total_bet,
            total_profit,
            net_profit: total_profit.saturating_sub(total_bet),
            return_to_player,
            avg_profit_per_hand,
        }
    }
}
