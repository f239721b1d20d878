//! Typed error type for the db crate.

use thiserror::Error;

/// The two failure kinds a repository operation can produce.
///
/// Callers discriminate on the variant, never on the message text.
#[derive(Debug, Error)]
pub enum DbError {
    /// The statement ran but no row matched.
    #[error("todo not found")]
    NotFound,

    /// The statement could not be executed (connectivity, malformed
    /// statement, constraint violation, ...).
    #[error("storage failure: {0}")]
    StorageFailure(#[from] sqlx::Error),
}

