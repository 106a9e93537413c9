//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures on inbound data.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Stored data is corrupt: {0}")]
    Corruption(String),

    #[error("Failed to read stored data: {0}")]
    Read(String),

    #[error("Failed to persist data: {0}")]
    Persistence(String),
}
