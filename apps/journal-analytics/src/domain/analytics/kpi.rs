//! Headline KPI summary.

use crate::domain::journal::Trade;
use crate::domain::trade_metrics::TradeMetrics;

use super::stats::TradeStats;
use super::types::KpiSummary;

/// Summarize a set of trades.
///
/// Never fails: an empty slice yields zero counts, zero PnL and a `NoData`
/// profit factor.
#[must_use]
pub fn summarize_kpis(trades: &[Trade]) -> KpiSummary {
    let metrics: Vec<TradeMetrics> = trades.iter().map(Trade::metrics).collect();
    summarize_metrics(&metrics)
}

/// Summarize already computed per-trade metrics.
#[must_use]
pub fn summarize_metrics(metrics: &[TradeMetrics]) -> KpiSummary {
    let stats: TradeStats = metrics.iter().collect();

    KpiSummary {
        total_trades: stats.trades as u64,
        winning_trades: stats.winning as u64,
        losing_trades: stats.losing as u64,
        win_rate: stats.win_rate(),
        total_pnl: stats.total_pnl,
        average_win: stats.average_win(),
        average_loss: stats.average_loss(),
        profit_factor: stats.profit_factor(),
        gross_profit: stats.gross_profit,
        gross_loss: stats.gross_loss,
    }
}
