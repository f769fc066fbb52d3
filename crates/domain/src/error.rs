//! Unified error types for the domain layer
//!
//! Evaluation never fails; these errors come from building challenge
//! content (validation, registration) before the registry is frozen.

use thiserror::Error;

use crate::ChallengeId;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid thresholds)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A challenge with the same id is already registered
    #[error("Duplicate challenge id: {0}")]
    DuplicateChallenge(ChallengeId),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for content that can never be satisfied
    /// or is malformed.
    ///
    /// # Example
    /// ```ignore
    /// if threshold <= 0 {
    ///     return Err(DomainError::validation("gold threshold must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate challenge error
    pub fn duplicate_challenge(id: ChallengeId) -> Self {
        Self::DuplicateChallenge(id)
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
