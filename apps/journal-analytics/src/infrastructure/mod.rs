//! Infrastructure Layer
//!
//! Configuration loading and logging setup for the binary.

pub mod config;
pub mod telemetry;

pub use config::{
    AnalyticsConfig, Config, ConfigError, LogFormat, LoggingConfig, OutputConfig, OutputFormat,
    load_config, load_config_from_string,
};
pub use telemetry::{TelemetryError, init_tracing};
