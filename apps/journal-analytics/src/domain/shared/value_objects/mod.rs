//! Shared value objects.

mod identifiers;
mod money;
mod ratio;

pub use identifiers::{AccountId, StrategyId, TradeId};
pub use money::Money;
pub use ratio::RatioValue;
