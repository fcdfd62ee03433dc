//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Advancing the inventory never fails; these only surface at the boundary
/// where raw item definitions are turned into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item definition could not be parsed.
    #[error("invalid item definition `{input}`: {reason}")]
    InvalidItem { input: String, reason: String },
}

impl DomainError {
    pub fn invalid_item(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidItem {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
