//! Service-level error types.

use db::DbError;
use thiserror::Error;

/// Errors produced by [`crate::TodoService`].
///
/// Same two kinds as the repository; the controller maps each variant to a
/// status code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    StorageFailure(#[source] DbError),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            other => Self::StorageFailure(other),
        }
    }
}
