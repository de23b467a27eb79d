//! Reference data trades point at: strategies and accounts.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, Money, StrategyId};

use super::trade::Trade;

/// Direction a strategy is meant to be traded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreferredDirection {
    /// Long setups only.
    Long,
    /// Short setups only.
    Short,
    /// Either side.
    #[default]
    Both,
}

/// A playbook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Strategy identifier.
    pub id: StrategyId,
    /// Display name.
    pub name: String,
    /// Free-text category.
    #[serde(default)]
    pub category: Option<String>,
    /// Preferred direction.
    #[serde(default)]
    pub preferred_direction: PreferredDirection,
    /// Timeframes the setup is read on, e.g. "15M", "1H".
    #[serde(default)]
    pub timeframes: Vec<String>,
    /// Entry criteria.
    #[serde(default)]
    pub entry_criteria: Option<String>,
    /// Exit criteria.
    #[serde(default)]
    pub exit_criteria: Option<String>,
}

/// Kind of trading account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    /// Live personal capital.
    #[default]
    Live,
    /// Funded prop account.
    Funded,
    /// Prop firm evaluation.
    Evaluation,
    /// Prop firm challenge.
    Challenge,
    /// Demo/paper account.
    Demo,
}

/// A trading account or profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Account type.
    #[serde(default, rename = "type")]
    pub account_type: AccountType,
    /// Broker or platform name.
    #[serde(default)]
    pub broker_platform: Option<String>,
    /// Starting balance.
    pub initial_balance: Money,
    /// Balance maintained by the persistence layer, if supplied.
    #[serde(default)]
    pub current_balance: Option<Money>,
}

impl Account {
    /// Initial balance plus the PnL of this account's trades.
    #[must_use]
    pub fn projected_balance(&self, trades: &[Trade]) -> Money {
        self.initial_balance
            + trades
                .iter()
                .filter(|trade| trade.account_id == self.id)
                .map(|trade| trade.metrics().pnl)
                .sum::<Money>()
    }

    /// The supplied current balance, falling back to the projected one.
    #[must_use]
    pub fn balance_or_projected(&self, trades: &[Trade]) -> Money {
        self.current_balance
            .unwrap_or_else(|| self.projected_balance(trades))
    }
}
