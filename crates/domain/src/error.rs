//! Unified error types for the domain layer
//!
//! Rejected sheet adjustments are not errors: `adjust` returns `false` and the
//! sheet stays untouched. `DomainError` covers caller mistakes only, such as asking
//! for a class or skill that does not exist.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Lookup of a name outside one of the closed vocabularies
    #[error("{entity_type} not found: {name}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// match token {
    ///     "+" => Ok(Delta::Increment),
    ///     _ => Err(DomainError::parse(format!("Unknown adjustment: {}", token))),
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
