//! Shared Domain Types
//!
//! Decimal helpers, value objects and errors shared across the journal,
//! metrics and analytics contexts.

pub mod errors;
pub mod numeric;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{AccountId, Money, RatioValue, StrategyId, TradeId};
