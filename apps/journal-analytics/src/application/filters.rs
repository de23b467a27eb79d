//! Trade selection applied before aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::journal::{Direction, Session, Trade};
use crate::domain::shared::{AccountId, StrategyId};

/// Criteria narrowing the trades a dashboard is built over.
///
/// Unset fields match everything. `start` bounds the entry time and `end`
/// bounds the exit time, both inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeFilter {
    /// Instrument symbol, compared case-insensitively.
    pub symbol: Option<String>,
    /// Strategy id.
    pub strategy_id: Option<StrategyId>,
    /// Account id.
    pub account_id: Option<AccountId>,
    /// Session.
    pub session: Option<Session>,
    /// Direction.
    pub direction: Option<Direction>,
    /// Earliest entry time.
    pub start: Option<DateTime<Utc>>,
    /// Latest exit time.
    pub end: Option<DateTime<Utc>>,
}

impl TradeFilter {
    /// Filter matching every trade.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Restrict to one strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy_id: StrategyId) -> Self {
        self.strategy_id = Some(strategy_id);
        self
    }

    /// Restrict to one account.
    #[must_use]
    pub fn with_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Restrict to one session.
    #[must_use]
    pub const fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Restrict to one direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Restrict to trades entered at or after `start` and exited at or
    /// before `end`.
    #[must_use]
    pub const fn between(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check one trade against every set criterion.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        self.symbol
            .as_deref()
            .is_none_or(|symbol| trade.symbol.trim().eq_ignore_ascii_case(symbol.trim()))
            && self.strategy_id.as_ref().is_none_or(|id| *id == trade.strategy_id)
            && self.account_id.as_ref().is_none_or(|id| *id == trade.account_id)
            && self.session.is_none_or(|session| trade.session == Some(session))
            && self.direction.is_none_or(|direction| trade.direction == direction)
            && self.start.is_none_or(|start| trade.entry_timestamp >= start)
            && self.end.is_none_or(|end| trade.exit_timestamp <= end)
    }

    /// Matching trades, in input order.
    #[must_use]
    pub fn apply(&self, trades: &[Trade]) -> Vec<Trade> {
        trades
            .iter()
            .filter(|trade| self.matches(trade))
            .cloned()
            .collect()
    }
}
