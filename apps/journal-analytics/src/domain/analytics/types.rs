//! Output records of the aggregation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, RatioValue};

/// Headline KPIs over a set of trades.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Number of trades.
    pub total_trades: u64,
    /// Trades with positive PnL.
    pub winning_trades: u64,
    /// Trades with negative PnL.
    pub losing_trades: u64,
    /// Winning trades over total trades (decimal, e.g., 0.5 = 50%).
    pub win_rate: Decimal,
    /// Sum of PnL.
    pub total_pnl: Money,
    /// Mean PnL of winning trades.
    pub average_win: Money,
    /// Mean PnL of losing trades (negative).
    pub average_loss: Money,
    /// Gross profit over gross loss magnitude.
    pub profit_factor: RatioValue,
    /// Sum of winning PnL.
    pub gross_profit: Money,
    /// Sum of losing PnL (negative).
    pub gross_loss: Money,
}

/// How equity curve points are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquityBucketing {
    /// One point per trade.
    #[default]
    PerTrade,
    /// One point per exit date, holding that day's last cumulative value.
    Daily,
}

/// Point on the cumulative PnL curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Exit date (serialized `YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Cumulative PnL up to and including this point.
    pub cumulative_pnl: Money,
}

/// Performance of the trades carrying one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPerformance {
    /// Tag name.
    pub tag_name: String,
    /// Sum of PnL.
    pub total_pnl: Money,
    /// Winning trades over tagged trades.
    pub win_rate: Decimal,
    /// Number of tagged trades.
    pub trade_count: u64,
}

/// Rollup of one strategy or account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Strategy or account id.
    pub group_key: String,
    /// Display name from reference data, if supplied.
    pub name: Option<String>,
    /// Number of trades.
    pub trades: u64,
    /// Winning trades over trades.
    pub win_rate: Decimal,
    /// Sum of PnL.
    pub total_pnl: Money,
    /// Sum of defined R-multiples.
    pub total_r: Decimal,
    /// Mean of defined R-multiples.
    pub average_r: Option<Decimal>,
    /// Expectancy per trade in R (same as `average_r`).
    pub expectancy_r: Option<Decimal>,
    /// Gross profit over gross loss magnitude.
    pub profit_factor: RatioValue,
    /// Account balance passed through from reference data (accounts only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current_balance: Option<Money>,
}
