//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so the
//! report on stdout stays machine-readable.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives (takes precedence)
//! - `logging.level`: default directive when `RUST_LOG` is unset
//! - `logging.format`: `text` or `json` lines
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_analytics::infrastructure::telemetry::init_tracing;
//!
//! init_tracing(&config.logging)?;
//! tracing::info!("Starting");
//! ```

use tracing_subscriber::EnvFilter;

use super::config::{LogFormat, LoggingConfig};

/// Telemetry setup errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter: `RUST_LOG` if set, else the configured level.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if the configured level does not
/// parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidFilter {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns a `TelemetryError` if the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Text => builder.with_ansi(false).try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_level() {
        let config = LoggingConfig {
            level: "journal_analytics=loud".to_string(),
            ..LoggingConfig::default()
        };
        // Only meaningful when RUST_LOG does not override the level.
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(
                build_filter(&config),
                Err(TelemetryError::InvalidFilter { .. })
            ));
        }
    }

    #[test]
    fn accepts_directives() {
        let config = LoggingConfig {
            level: "info,journal_analytics=debug".to_string(),
            ..LoggingConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }
}
