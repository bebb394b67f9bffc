//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures surfaced to the API boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found")]
    NotFound,

    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("duplicate resource: {0}")]
    Duplicate(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("document failed validation: {0:?}")]
    Invalid(Vec<String>),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => DomainError::NotFound,
            StoreError::Invalid(errors) => DomainError::Validation(errors),
            StoreError::Duplicate(key) => DomainError::Duplicate(key),
            StoreError::Connection(msg) | StoreError::Query(msg) => DomainError::Internal(msg),
        }
    }
}
