//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate title,
//! database faults) instead of parsing printed text. Every catalog
//! operation returns one of these; none of them should abort the process.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the given title on delete/update.
    #[error("no movie found with title '{0}'")]
    NotFound(String),

    /// Unique constraint violation on insert (title collision).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / connection / I/O failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Schema migration failure on open.
    #[error("migration error: {0}")]
    Migration(#[source] rusqlite::Error),

    /// Connection mutex poisoned by a panicking holder.
    #[error("database lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// Whether this error is a unique-constraint violation.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Whether this error is a not-found outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// Constraint violations become `Duplicate` (the only constraint in the
/// schema is the UNIQUE index on `title`); everything else is `Database`.
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Duplicate(msg.clone().unwrap_or_else(|| e.to_string()))
            },
            _ => Self::Database(err),
        }
    }
}
