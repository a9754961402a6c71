//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    /// Attach the entity kind and id to a bare `NotFound`.
    pub fn into_domain(self, entity_type: &'static str, id: i32) -> DomainError {
        match self {
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
            RepoError::Constraint(msg) => DomainError::Duplicate(msg),
            other => DomainError::Internal(other.to_string()),
        }
    }
}
