//! Domain layer: the pure trade economics core.

pub mod analytics;
pub mod journal;
pub mod shared;
pub mod trade_metrics;
