//! Trade record: the unit of analysis.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, DomainError, StrategyId, TradeId};
use crate::domain::trade_metrics::{MetricInputs, TradeMetrics, compute_metrics};

use super::labels::{ConfirmationSet, TagSet};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Bought first, sold to close.
    Long,
    /// Sold first, bought to close.
    Short,
}

/// Trading session the trade was taken in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    /// New York.
    #[serde(rename = "NY")]
    NewYork,
    /// London.
    London,
    /// Asia.
    Asia,
}

/// A closed, journaled trade.
///
/// Only execution, plan and context fields are stored; PnL, risk, planned
/// R:R and R-multiple are recomputed by [`Trade::metrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade identifier.
    pub id: TradeId,
    /// Instrument symbol.
    pub symbol: String,
    /// Long or short.
    pub direction: Direction,
    /// Session, if recorded.
    #[serde(default)]
    pub session: Option<Session>,
    /// Entry fill price.
    pub entry_price: Decimal,
    /// Exit fill price.
    pub exit_price: Decimal,
    /// Position size.
    pub quantity: Decimal,
    /// Round-trip commissions.
    #[serde(default)]
    pub commissions: Decimal,
    /// Planned stop-loss level.
    #[serde(default)]
    pub stop_loss_planned: Option<Decimal>,
    /// Planned take-profit level.
    #[serde(default)]
    pub take_profit_planned: Option<Decimal>,
    /// Entry time.
    pub entry_timestamp: DateTime<Utc>,
    /// Exit time.
    pub exit_timestamp: DateTime<Utc>,
    /// Strategy the trade was taken under.
    pub strategy_id: StrategyId,
    /// Account the trade was booked in.
    pub account_id: AccountId,
    /// Free-text tags.
    #[serde(default)]
    pub tags: TagSet,
    /// Confirmations observed before entry.
    #[serde(default)]
    pub confirmations: ConfirmationSet,
    /// Journal notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trade {
    /// Calculator inputs for this trade.
    #[must_use]
    pub const fn metric_inputs(&self) -> MetricInputs {
        MetricInputs {
            direction: self.direction,
            entry_price: self.entry_price,
            exit_price: self.exit_price,
            quantity: self.quantity,
            commissions: self.commissions,
            stop_loss: self.stop_loss_planned,
            take_profit: self.take_profit_planned,
        }
    }

    /// Recompute the derived metrics from the stored fields.
    #[must_use]
    pub fn metrics(&self) -> TradeMetrics {
        compute_metrics(&self.metric_inputs())
    }

    /// Number of distinct confirmations.
    #[must_use]
    pub fn confirmations_count(&self) -> usize {
        self.confirmations.len()
    }

    /// Check the fields the engine assumes are well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] for a non-positive price or
    /// quantity, negative commissions, a non-positive plan level, or an exit
    /// before the entry.
    pub fn validate(&self) -> Result<(), DomainError> {
        let id = self.id.as_str();

        for (field, value) in [
            ("entryPrice", self.entry_price),
            ("exitPrice", self.exit_price),
            ("quantity", self.quantity),
        ] {
            if value <= Decimal::ZERO {
                return Err(DomainError::invalid(id, field, "must be greater than zero"));
            }
        }

        if self.commissions < Decimal::ZERO {
            return Err(DomainError::invalid(id, "commissions", "must not be negative"));
        }

        for (field, value) in [
            ("stopLossPlanned", self.stop_loss_planned),
            ("takeProfitPlanned", self.take_profit_planned),
        ] {
            if value.is_some_and(|v| v <= Decimal::ZERO) {
                return Err(DomainError::invalid(id, field, "must be greater than zero"));
            }
        }

        if self.exit_timestamp < self.entry_timestamp {
            return Err(DomainError::invalid(
                id,
                "exitTimestamp",
                "must not be before entryTimestamp",
            ));
        }

        if self.symbol.trim().is_empty() {
            return Err(DomainError::invalid(id, "symbol", "must not be blank"));
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::fixtures::trade_with_pnl;
    use super::*;
    use crate::domain::shared::Money;

    #[test]
    fn metrics_follow_stored_fields() {
        let mut trade = trade_with_pnl("t1", dec!(10), 2, 14);
        trade.stop_loss_planned = Some(dec!(95));
        trade.take_profit_planned = Some(dec!(115));

        let metrics = trade.metrics();
        assert_eq!(metrics.pnl, Money::new(dec!(10)));
        assert_eq!(metrics.r_multiple, Some(dec!(2)));
        assert_eq!(metrics, trade.metrics());

        trade.exit_price = dec!(95);
        assert_eq!(trade.metrics().r_multiple, Some(dec!(-1)));
    }

    #[test]
    fn validate_accepts_well_formed_trade() {
        assert!(trade_with_pnl("t1", dec!(10), 2, 14).validate().is_ok());
    }

    #[test]
    fn validate_rejects_exit_before_entry() {
        let mut trade = trade_with_pnl("t1", dec!(10), 2, 14);
        trade.exit_timestamp = trade.entry_timestamp - chrono::Duration::minutes(1);

        let Err(DomainError::InvalidValue { field, .. }) = trade.validate() else {
            panic!("exit before entry should be rejected");
        };
        assert_eq!(field, "exitTimestamp");
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        let mut trade = trade_with_pnl("t1", dec!(10), 2, 14);
        trade.quantity = Decimal::ZERO;
        assert!(trade.validate().is_err());

        let mut trade = trade_with_pnl("t2", dec!(10), 2, 14);
        trade.commissions = dec!(-1);
        assert!(trade.validate().is_err());

        let mut trade = trade_with_pnl("t3", dec!(10), 2, 14);
        trade.stop_loss_planned = Some(dec!(-5));
        assert!(trade.validate().is_err());
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "t-9",
            "symbol": "NQ",
            "direction": "Short",
            "session": "NY",
            "entryPrice": "15234.50",
            "exitPrice": "15260.25",
            "quantity": "2",
            "commissions": "4.00",
            "stopLossPlanned": "15250.00",
            "takeProfitPlanned": "15200.00",
            "entryTimestamp": "2024-03-01T14:30:00Z",
            "exitTimestamp": "2024-03-01T15:10:00Z",
            "strategyId": "str-1",
            "accountId": "acc-1",
            "tags": ["news", "News", "A+"],
            "confirmations": ["OTE", "OTE"]
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.session, Some(Session::NewYork));
        assert_eq!(trade.tags.len(), 2);
        assert_eq!(trade.confirmations_count(), 1);
        assert_eq!(trade.metrics().pnl, Money::new(dec!(-55.50)));
    }
}
