//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// pricing arguments, lifecycle rules, aggregate invariants). Infrastructure
/// concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was absent or blank.
    #[error("missing required value: {0}")]
    Missing(String),

    /// A value was present but out of its declared domain (range, format).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A computation was called with an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lifecycle transition is not permitted from the current state.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// An entity with the same identity already exists inside the aggregate.
    #[error("duplicate entity: {0}")]
    Duplicate(String),
}

impl DomainError {
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::Missing(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn illegal_state(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// True for both flavours of construction-time validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Missing(_) | Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_validation_are_both_validation_failures() {
        assert!(DomainError::missing("id").is_validation());
        assert!(DomainError::validation("percentage").is_validation());
        assert!(!DomainError::invalid_argument("quantity").is_validation());
        assert!(!DomainError::illegal_state("discontinued").is_validation());
        assert!(!DomainError::duplicate("variant").is_validation());
    }

    #[test]
    fn display_includes_message() {
        let err = DomainError::illegal_state("cannot activate a discontinued variant");
        assert_eq!(
            err.to_string(),
            "illegal state: cannot activate a discontinued variant"
        );
    }
}
