//! Input and output records of the trade metrics calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::journal::Direction;
use crate::domain::shared::Money;
use crate::domain::shared::numeric::{non_zero, or_zero};

/// Execution and plan fields the calculator reads for one trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricInputs {
    /// Long or short.
    pub direction: Direction,
    /// Fill price on entry.
    pub entry_price: Decimal,
    /// Fill price on exit.
    pub exit_price: Decimal,
    /// Position size.
    pub quantity: Decimal,
    /// Total commissions for the round trip.
    pub commissions: Decimal,
    /// Planned stop-loss level. Zero is treated as not set.
    pub stop_loss: Option<Decimal>,
    /// Planned take-profit level. Zero is treated as not set.
    pub take_profit: Option<Decimal>,
}

impl MetricInputs {
    /// Inputs for a fully specified execution with no commissions or plan.
    #[must_use]
    pub const fn new(
        direction: Direction,
        entry_price: Decimal,
        exit_price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            direction,
            entry_price,
            exit_price,
            quantity,
            commissions: Decimal::ZERO,
            stop_loss: None,
            take_profit: None,
        }
    }

    /// Inputs from partially filled data, e.g. a trade form being edited.
    ///
    /// Missing prices, quantity and commissions become zero; missing or zero
    /// plan levels stay unset.
    #[must_use]
    pub fn from_partial(
        direction: Direction,
        entry_price: Option<Decimal>,
        exit_price: Option<Decimal>,
        quantity: Option<Decimal>,
        commissions: Option<Decimal>,
        stop_loss: Option<Decimal>,
        take_profit: Option<Decimal>,
    ) -> Self {
        Self {
            direction,
            entry_price: or_zero(entry_price),
            exit_price: or_zero(exit_price),
            quantity: or_zero(quantity),
            commissions: or_zero(commissions),
            stop_loss: non_zero(stop_loss),
            take_profit: non_zero(take_profit),
        }
    }

    /// Set the round-trip commissions.
    #[must_use]
    pub const fn with_commissions(mut self, commissions: Decimal) -> Self {
        self.commissions = commissions;
        self
    }

    /// Set the planned stop-loss level.
    #[must_use]
    pub const fn with_stop_loss(mut self, stop_loss: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    /// Set the planned take-profit level.
    #[must_use]
    pub const fn with_take_profit(mut self, take_profit: Decimal) -> Self {
        self.take_profit = Some(take_profit);
        self
    }
}

/// Derived per-trade metrics.
///
/// `None` means "not computable" (no stop defined, zero-distance stop, ...),
/// which is distinct from a computed zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TradeMetrics {
    /// Realized profit or loss net of commissions.
    pub pnl: Money,
    /// Dollar risk to the planned stop.
    pub risk: Option<Money>,
    /// Planned reward-to-risk ratio.
    pub planned_rr: Option<Decimal>,
    /// Realized PnL in units of planned risk.
    pub r_multiple: Option<Decimal>,
}

impl TradeMetrics {
    /// Check if the trade closed with a profit.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.pnl.is_positive()
    }

    /// Check if the trade closed with a loss.
    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.pnl.is_negative()
    }
}
