//! Aggregation engine.
//!
//! Rolls per-trade metrics up into portfolio views:
//! - KPI summary (win rate, averages, profit factor)
//! - Equity curve and max drawdown
//! - Performance by tag, strategy and account
//!
//! Every function is total: empty input degrades to zero, `None` or a
//! [`RatioValue`](crate::domain::shared::RatioValue) sentinel.

mod equity;
mod format;
mod grouping;
mod kpi;
mod stats;
mod types;

pub use equity::{equity_curve, max_drawdown};
pub use format::{
    NEGATIVE_INFINITY, NO_DATA, POSITIVE_INFINITY, format_decimal, format_money, format_pct,
    format_r, format_ratio,
};
pub use grouping::{
    DEFAULT_PARALLEL_THRESHOLD, GroupSummarizer, account_summaries, performance_by_tag,
    strategy_summaries,
};
pub use kpi::{summarize_kpis, summarize_metrics};
pub use stats::profit_factor;
pub use types::{EquityBucketing, EquityPoint, GroupSummary, KpiSummary, TagPerformance};
