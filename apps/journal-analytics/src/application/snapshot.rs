//! Journal snapshot: the batch of trades and reference data one dashboard
//! is built from.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::domain::journal::{Account, Strategy, Trade};
use crate::domain::shared::DomainError;

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file.
    #[error("Failed to read snapshot '{path}': {source}")]
    ReadError {
        /// Path to the snapshot file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse snapshot JSON.
    #[error("Failed to parse snapshot JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Snapshot content is malformed.
    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] DomainError),
}

/// Trades plus the strategies and accounts they reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalSnapshot {
    /// Closed trades.
    pub trades: Vec<Trade>,
    /// Strategy reference data.
    pub strategies: Vec<Strategy>,
    /// Account reference data.
    pub accounts: Vec<Account>,
}

impl JournalSnapshot {
    /// Check the snapshot before it reaches the engine.
    ///
    /// Rejects duplicate ids, malformed trades (see [`Trade::validate`]) and,
    /// when strategies or accounts are supplied, trades pointing at an id
    /// missing from them. Unknown confirmation labels are logged, not
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] found.
    pub fn validate(&self) -> Result<(), DomainError> {
        let strategy_ids = unique_ids("Strategy", self.strategies.iter().map(|s| s.id.as_str()))?;
        let account_ids = unique_ids("Account", self.accounts.iter().map(|a| a.id.as_str()))?;
        unique_ids("Trade", self.trades.iter().map(|t| t.id.as_str()))?;

        for trade in &self.trades {
            trade.validate()?;

            if !strategy_ids.is_empty() && !strategy_ids.contains(trade.strategy_id.as_str()) {
                return Err(DomainError::NotFound {
                    entity_type: "Strategy".to_string(),
                    id: trade.strategy_id.to_string(),
                });
            }
            if !account_ids.is_empty() && !account_ids.contains(trade.account_id.as_str()) {
                return Err(DomainError::NotFound {
                    entity_type: "Account".to_string(),
                    id: trade.account_id.to_string(),
                });
            }

            for label in trade.confirmations.unknown() {
                warn!(trade_id = %trade.id, label, "Unknown confirmation label");
            }
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    entity_type: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, DomainError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::DuplicateId {
                entity_type: entity_type.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

/// Parse and validate a snapshot from JSON text.
///
/// # Errors
///
/// Returns a `SnapshotError` if the JSON cannot be parsed or validated.
pub fn parse_snapshot(json: &str) -> Result<JournalSnapshot, SnapshotError> {
    let snapshot: JournalSnapshot = serde_json::from_str(json)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Load and validate a snapshot from a JSON file.
///
/// # Errors
///
/// Returns a `SnapshotError` if the file cannot be read, parsed, or
/// validated.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<JournalSnapshot, SnapshotError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| SnapshotError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_snapshot(&contents)
}
