//! Error types for the target database layer.

use thiserror::Error;

/// Target database errors.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to open or create the target database (D001).
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// A migration script failed to execute (D002).
    #[error("[D002] Script '{script}' failed: {message}")]
    ScriptFailed { script: String, message: String },

    /// Transaction management error (D003).
    #[error("[D003] Transaction failed: {0}")]
    TransactionError(String),

    /// Ledger table could not be created, read, or written (D004).
    #[error("[D004] Ledger error: {0}")]
    LedgerError(String),

    /// DuckDB driver error with preserved source chain (D005).
    #[error("[D005] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`DbError`].
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        DbError::DuckDb(err)
    }
}

impl DbError {
    /// Name of the failing script, when this error carries one.
    pub fn failed_script(&self) -> Option<&str> {
        match self {
            DbError::ScriptFailed { script, .. } => Some(script),
            _ => None,
        }
    }
}
