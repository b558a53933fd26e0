//! Write-path error type.
//!
//! Every insert, update, and delete is a single statement and therefore its
//! own implicit transaction: on failure nothing is applied. Callers receive a
//! [`StoreFailure`] and decide what to tell the user.

/// A failed write against the store.
#[derive(Debug, thiserror::Error)]
#[error("Store write failed: {source}")]
pub struct StoreFailure {
    #[from]
    source: sqlx::Error,
}

impl StoreFailure {
    /// The underlying sqlx error, for logging.
    pub fn source_error(&self) -> &sqlx::Error {
        &self.source
    }

    /// Whether the write referenced a row that does not exist.
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(&self.source, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
    }
}

/// Result of a write operation.
pub type WriteResult<T> = Result<T, StoreFailure>;
