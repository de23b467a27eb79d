//! Domain errors for the journal analytics core.
//!
//! The metric and aggregation functions are total and never return these;
//! they are raised at the boundary where snapshots are checked before
//! reaching the engine.

use thiserror::Error;

/// Domain-level errors that can occur while validating journal data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid value for a field.
    #[error("Invalid value for '{field}' on {entity}: {message}")]
    InvalidValue {
        /// Entity identifier the field belongs to.
        entity: String,
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Referenced entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Entity type.
        entity_type: String,
        /// Entity identifier.
        id: String,
    },

    /// Same identifier used twice in one dataset.
    #[error("Duplicate {entity_type} id: {id}")]
    DuplicateId {
        /// Entity type.
        entity_type: String,
        /// Entity identifier.
        id: String,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidValue`].
    pub fn invalid(
        entity: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            entity: entity.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_display() {
        let err = DomainError::invalid("trd-1", "quantity", "must be positive");
        let msg = err.to_string();
        assert!(msg.contains("quantity"));
        assert!(msg.contains("trd-1"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn not_found_display() {
        let err = DomainError::NotFound {
            entity_type: "Strategy".to_string(),
            id: "str-9".to_string(),
        };
        assert_eq!(err.to_string(), "Strategy not found: str-9");
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::DuplicateId {
            entity_type: "Trade".to_string(),
            id: "t".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
