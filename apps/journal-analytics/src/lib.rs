// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements,
        clippy::cast_possible_wrap
    )
)]

//! Journal Analytics - Trade Economics Core
//!
//! Trade metrics and performance aggregation for the trading journal.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure, total computations over an in-memory snapshot
//!   - `shared`: Decimal helpers, `Money`, `RatioValue`, identifiers, errors
//!   - `journal`: `Trade`, `Strategy`, `Account`, tag and confirmation sets
//!   - `trade_metrics`: PnL, risk, planned R:R, R-multiple
//!   - `analytics`: KPI summary, equity curve, tag/strategy/account rollups,
//!     display formatting
//!
//! - **Application**: Snapshot validation, trade filters, `DashboardService`
//!
//! - **Infrastructure**: YAML/env configuration, tracing subscriber setup
//!
//! # Numbers
//!
//! All money and ratios are `rust_decimal::Decimal`. Degenerate divisions
//! never panic: they resolve to `None` or a [`RatioValue`] sentinel.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core computations with no I/O.
pub mod domain;

/// Application layer - Snapshot input and dashboard orchestration.
pub mod application;

/// Infrastructure layer - Configuration and logging.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::analytics::{
    EquityBucketing, EquityPoint, GroupSummarizer, GroupSummary, KpiSummary, TagPerformance,
    account_summaries, equity_curve, max_drawdown, performance_by_tag, strategy_summaries,
    summarize_kpis,
};
pub use domain::journal::{Account, Direction, Session, Strategy, TagSet, Trade};
pub use domain::shared::{AccountId, DomainError, Money, RatioValue, StrategyId, TradeId};
pub use domain::trade_metrics::{MetricInputs, TradeMetrics, compute_metrics};

// Application re-exports
pub use application::{
    DashboardReport, DashboardService, JournalSnapshot, SnapshotError, TradeFilter, load_snapshot,
};

// Infrastructure re-exports
pub use infrastructure::{Config, ConfigError, load_config};
