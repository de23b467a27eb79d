//! Trade metrics calculator.
//!
//! Turns the execution and plan fields of one trade into:
//! - PnL (net of commissions)
//! - Risk per trade (distance to planned stop times quantity)
//! - Planned reward:risk
//! - R-multiple (realized PnL over planned risk)

mod calculator;
mod types;

pub use calculator::{
    calculate_planned_rr, calculate_pnl, calculate_r_multiple, calculate_risk_per_trade,
    compute_metrics,
};
pub use types::{MetricInputs, TradeMetrics};
