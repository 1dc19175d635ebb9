//! Repository Module
//!
//! Function-style CRUD over the SQLite pool, one module per entity.
//! Relationship integrity (cascades, subtask unlinking) is enforced by the
//! schema; the repositories add the checks the schema cannot express
//! (existence of referenced rows, parent cycles).

pub mod board;
pub mod comment;
pub mod tag;
pub mod task;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
