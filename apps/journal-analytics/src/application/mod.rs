//! Application Layer
//!
//! Orchestrates the domain rollups for one dashboard request:
//!
//! - **Snapshot**: the input batch and its boundary validation
//! - **Filters**: trade selection applied before aggregation
//! - **Dashboard**: composes every view into one report
//! - **Text report**: plain-text rendering of that report

pub mod dashboard;
pub mod filters;
pub mod snapshot;
pub mod text_report;

pub use dashboard::{DashboardReport, DashboardService};
pub use filters::TradeFilter;
pub use snapshot::{JournalSnapshot, SnapshotError, load_snapshot, parse_snapshot};
pub use text_report::render_text;
