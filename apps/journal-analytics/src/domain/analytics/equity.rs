//! Equity curve and drawdown.

use std::cmp::Ordering;

use crate::domain::journal::Trade;
use crate::domain::shared::Money;

use super::types::{EquityBucketing, EquityPoint};

/// Chronological order used by the equity curve: exit time, then entry
/// time, then trade id.
fn chronological(a: &&Trade, b: &&Trade) -> Ordering {
    a.exit_timestamp
        .cmp(&b.exit_timestamp)
        .then_with(|| a.entry_timestamp.cmp(&b.entry_timestamp))
        .then_with(|| a.id.cmp(&b.id))
}

/// Running cumulative PnL, ordered by exit time.
///
/// With [`EquityBucketing::Daily`], trades exiting on the same calendar day
/// (UTC) collapse into one point holding the day's last cumulative value.
#[must_use]
pub fn equity_curve(trades: &[Trade], bucketing: EquityBucketing) -> Vec<EquityPoint> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by(chronological);

    let mut points: Vec<EquityPoint> = Vec::with_capacity(ordered.len());
    let mut cumulative = Money::ZERO;

    for trade in ordered {
        cumulative += trade.metrics().pnl;
        let date = trade.exit_timestamp.date_naive();

        if bucketing == EquityBucketing::Daily {
            if let Some(last) = points.last_mut().filter(|p| p.date == date) {
                last.cumulative_pnl = cumulative;
                continue;
            }
        }

        points.push(EquityPoint {
            date,
            cumulative_pnl: cumulative,
        });
    }

    points
}

/// Largest peak-to-trough drop of cumulative PnL.
///
/// The curve starts from a zero peak, so an opening loss counts as drawdown.
#[must_use]
pub fn max_drawdown(points: &[EquityPoint]) -> Money {
    let mut peak = Money::ZERO;
    let mut max_drawdown = Money::ZERO;

    for point in points {
        peak = peak.max(point.cumulative_pnl);
        max_drawdown = max_drawdown.max(peak - point.cumulative_pnl);
    }

    max_drawdown
}
