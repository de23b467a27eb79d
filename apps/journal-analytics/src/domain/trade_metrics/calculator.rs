//! Per-trade economics: PnL, risk, planned R:R and R-multiple.
//!
//! Every function here is pure and total. Degenerate inputs resolve to
//! zero or `None` as documented on each function; nothing panics.

use rust_decimal::Decimal;

use crate::domain::journal::Direction;
use crate::domain::shared::Money;
use crate::domain::shared::numeric::{checked_ratio, non_zero, scaled_distance};

use super::types::{MetricInputs, TradeMetrics};

/// Realized PnL net of commissions.
///
/// Long: `(exit - entry) * quantity - commissions`.
/// Short: `(entry - exit) * quantity - commissions`.
///
/// Zero when quantity, entry or exit is zero.
#[must_use]
pub fn calculate_pnl(
    direction: Direction,
    entry_price: Decimal,
    exit_price: Decimal,
    quantity: Decimal,
    commissions: Decimal,
) -> Money {
    if quantity.is_zero() || entry_price.is_zero() || exit_price.is_zero() {
        return Money::ZERO;
    }

    let per_unit = match direction {
        Direction::Long => exit_price.saturating_sub(entry_price),
        Direction::Short => entry_price.saturating_sub(exit_price),
    };

    Money::new(per_unit.saturating_mul(quantity).saturating_sub(commissions))
}

/// Dollar risk between entry and the planned stop, `|entry - stop| * quantity`.
///
/// `None` when no stop is set, quantity is zero, or the stop sits on the
/// entry price.
#[must_use]
pub fn calculate_risk_per_trade(
    entry_price: Decimal,
    stop_loss: Option<Decimal>,
    quantity: Decimal,
) -> Option<Money> {
    let stop_loss = non_zero(stop_loss)?;
    if quantity.is_zero() {
        return None;
    }

    let risk = scaled_distance(entry_price, stop_loss, quantity)?;
    (!risk.is_zero()).then_some(Money::new(risk))
}

/// Planned reward over planned risk.
///
/// `None` unless both plan levels are set and both distances are non-zero.
#[must_use]
pub fn calculate_planned_rr(
    entry_price: Decimal,
    stop_loss: Option<Decimal>,
    take_profit: Option<Decimal>,
    quantity: Decimal,
) -> Option<Decimal> {
    let stop_loss = non_zero(stop_loss)?;
    let take_profit = non_zero(take_profit)?;

    let risk = scaled_distance(entry_price, stop_loss, quantity)?;
    if risk.is_zero() {
        return None;
    }

    let reward = scaled_distance(entry_price, take_profit, quantity)?;
    if reward.is_zero() {
        return None;
    }

    checked_ratio(reward, risk)
}

/// Realized PnL in units of planned risk. Sign follows `pnl`.
#[must_use]
pub fn calculate_r_multiple(pnl: Money, risk: Option<Money>) -> Option<Decimal> {
    pnl.ratio_to(risk?)
}

/// Compute all derived metrics for one trade.
#[must_use]
pub fn compute_metrics(inputs: &MetricInputs) -> TradeMetrics {
    let pnl = calculate_pnl(
        inputs.direction,
        inputs.entry_price,
        inputs.exit_price,
        inputs.quantity,
        inputs.commissions,
    );
    let risk = calculate_risk_per_trade(inputs.entry_price, inputs.stop_loss, inputs.quantity);
    let planned_rr = calculate_planned_rr(
        inputs.entry_price,
        inputs.stop_loss,
        inputs.take_profit,
        inputs.quantity,
    );
    let r_multiple = calculate_r_multiple(pnl, risk);

    TradeMetrics {
        pnl,
        risk,
        planned_rr,
        r_multiple,
    }
}
