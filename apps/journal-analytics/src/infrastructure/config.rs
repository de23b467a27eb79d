//! Configuration for the journal analytics binary.
//!
//! Loaded from a YAML file, then overridden from environment variables:
//!
//! - `JOURNAL_SNAPSHOT`: path of the JSON snapshot to analyze
//! - `JOURNAL_EQUITY_BUCKETING`: `per_trade` | `daily`
//! - `JOURNAL_OUTPUT`: `json` | `text`
//! - `JOURNAL_LOG_LEVEL`: default log filter when `RUST_LOG` is unset
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_analytics::infrastructure::config::load_config;
//!
//! // Load from default path (journal.yaml), falling back to defaults
//! let config = load_config(None)?.with_env_overrides()?;
//! ```

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analytics::{DEFAULT_PARALLEL_THRESHOLD, EquityBucketing};

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "journal.yaml";

/// Largest supported number of display decimal places.
pub const MAX_DECIMAL_PLACES: u32 = 8;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file to analyze when none is given on the command line.
    #[serde(default)]
    pub snapshot: Option<String>,
    /// Aggregation settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Aggregation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Equity curve bucketing.
    #[serde(default)]
    pub equity_bucketing: EquityBucketing,
    /// Trade count at which group summaries run in parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            equity_bucketing: EquityBucketing::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

const fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Plain-text tables.
    Text,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimal places for ratios in text output.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            decimal_places: default_decimal_places(),
        }
    }
}

const fn default_decimal_places() -> u32 {
    2
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Apply the `JOURNAL_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an override holds an unknown value.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an override holds an unknown value.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(path) = get("JOURNAL_SNAPSHOT") {
            self.snapshot = Some(path);
        }
        if let Some(value) = get("JOURNAL_EQUITY_BUCKETING") {
            self.analytics.equity_bucketing = parse_choice("JOURNAL_EQUITY_BUCKETING", &value)?;
        }
        if let Some(value) = get("JOURNAL_OUTPUT") {
            self.output.format = parse_choice("JOURNAL_OUTPUT", &value)?;
        }
        if let Some(level) = get("JOURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }

        validate_config(&self)?;
        Ok(self)
    }
}

/// Parse a snake_case enum value, ignoring case.
fn parse_choice<T: DeserializeOwned>(var: &str, value: &str) -> Result<T, ConfigError> {
    let normalized = value.trim().to_lowercase();
    let deserializer: StrDeserializer<'_, ValueError> = normalized.as_str().into_deserializer();
    T::deserialize(deserializer)
        .map_err(|e| ConfigError::ValidationError(format!("{var}: {e}")))
}

/// Load configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "journal.yaml",
///   and a missing default file yields the default configuration.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let explicit = path.is_some();
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_string(),
                source: e,
            });
        }
    };

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml_bw::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.output.decimal_places > MAX_DECIMAL_PLACES {
        return Err(ConfigError::ValidationError(format!(
            "output.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
            config.output.decimal_places
        )));
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".to_string(),
        ));
    }

    if config.snapshot.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "snapshot path must not be empty".to_string(),
        ));
    }

    Ok(())
}
