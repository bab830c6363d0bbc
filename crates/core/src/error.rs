//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures. There is no retry
/// policy anywhere: re-invoking an operation with identical input reproduces
/// the identical error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A query matched more entries than the server may return.
    ///
    /// This is a query-rejected condition, not a system fault; `count` is the
    /// number of matched-but-rejected entries.
    #[error("too many fitting products: {count} found")]
    TooManyResults { count: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn too_many_results(count: usize) -> Self {
        Self::TooManyResults { count }
    }
}
