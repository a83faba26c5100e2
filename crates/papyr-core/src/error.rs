//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field is missing or empty. Raised before any store
    /// interaction, so a validation failure has no side effect.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A collaborator failure, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors, surfaced by the `PostStore` and `UserDirectory` ports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
