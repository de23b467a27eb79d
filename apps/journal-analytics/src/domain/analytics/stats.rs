//! Running trade statistics shared by every rollup.
//!
//! KPI, tag, strategy and account views all fold trades through
//! [`TradeStats`], so win rate and profit factor agree across views.

use rust_decimal::Decimal;

use crate::domain::shared::numeric::{checked_ratio, count_ratio};
use crate::domain::shared::{Money, RatioValue};
use crate::domain::trade_metrics::TradeMetrics;

/// Gross profit over the magnitude of gross loss.
///
/// - wins and no losses: `PositiveInfinity`
/// - no wins and no losses: `NoData`
/// - otherwise `gross_profit / |gross_loss|` (zero with only losses)
#[must_use]
pub fn profit_factor(gross_profit: Money, gross_loss: Money) -> RatioValue {
    let loss = gross_loss.abs();
    if loss.is_zero() {
        return if gross_profit.is_positive() {
            RatioValue::PositiveInfinity
        } else {
            RatioValue::NoData
        };
    }
    gross_profit
        .ratio_to(loss)
        .map_or(RatioValue::NoData, RatioValue::Finite)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TradeStats {
    pub trades: usize,
    pub winning: usize,
    pub losing: usize,
    pub total_pnl: Money,
    pub gross_profit: Money,
    /// Sum of losing PnL, kept negative.
    pub gross_loss: Money,
    pub total_r: Decimal,
    pub r_count: usize,
}

impl TradeStats {
    pub fn record(&mut self, metrics: &TradeMetrics) {
        self.trades += 1;
        self.total_pnl += metrics.pnl;

        if metrics.is_winner() {
            self.winning += 1;
            self.gross_profit += metrics.pnl;
        } else if metrics.is_loser() {
            self.losing += 1;
            self.gross_loss += metrics.pnl;
        }

        if let Some(r) = metrics.r_multiple {
            self.total_r = self.total_r.saturating_add(r);
            self.r_count += 1;
        }
    }

    pub fn win_rate(&self) -> Decimal {
        count_ratio(self.winning, self.trades)
    }

    pub fn average_win(&self) -> Money {
        self.gross_profit.average_over(self.winning)
    }

    pub fn average_loss(&self) -> Money {
        self.gross_loss.average_over(self.losing)
    }

    pub fn profit_factor(&self) -> RatioValue {
        profit_factor(self.gross_profit, self.gross_loss)
    }

    /// Mean R over trades with a defined R-multiple.
    pub fn average_r(&self) -> Option<Decimal> {
        if self.r_count == 0 {
            return None;
        }
        checked_ratio(self.total_r, Decimal::from(self.r_count as u64))
    }
}

impl<'a> FromIterator<&'a TradeMetrics> for TradeStats {
    fn from_iter<I: IntoIterator<Item = &'a TradeMetrics>>(iter: I) -> Self {
        let mut stats = Self::default();
        for metrics in iter {
            stats.record(metrics);
        }
        stats
    }
}
