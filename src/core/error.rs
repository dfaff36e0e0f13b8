//! Error types for chainbook.

use thiserror::Error;

/// Result type alias for chainbook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chainbook operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Persisted state failed to parse or failed validation at load time.
    #[error("persisted ledger data is corrupt: {0}")]
    PersistenceCorrupt(String),

    /// The session store rejected a write (e.g. quota exceeded).
    #[error("session store write failed: {0}")]
    StorageWriteFailed(String),

    /// An internal chain invariant did not hold.
    #[error("chain invariant violated: {0}")]
    InvariantViolation(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
