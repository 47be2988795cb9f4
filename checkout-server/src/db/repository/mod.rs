//! Repository Module
//!
//! Storage access as free async functions over `&SqlitePool`.
//! The checkout commit in [`transaction`] is the only place that writes
//! `transactions`/`orders`/`carts` rows together.

pub mod cart;
pub mod catalog;
pub mod transaction;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Rollback after a failed commit itself failed. The persisted state is
    /// uncertain and needs operator attention; this is deliberately kept
    /// apart from the error that triggered the rollback.
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::RollbackFailed(msg) => {
                AppError::with_message(ErrorCode::RollbackFailed, msg)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Decode a JSON-encoded topping-id column
pub(crate) fn parse_topping_ids(raw: &str) -> Vec<i64> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode topping ids for storage
pub(crate) fn encode_topping_ids(ids: &[i64]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topping_ids_roundtrip() {
        let encoded = encode_topping_ids(&[1, 2, 3]);
        assert_eq!(parse_topping_ids(&encoded), vec![1, 2, 3]);
    }

    #[test]
    fn test_topping_ids_garbage_is_empty() {
        assert!(parse_topping_ids("not json").is_empty());
        assert!(parse_topping_ids("").is_empty());
    }
}
