/// Errors from ledger document storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the filesystem backend. Directory creation failures
    /// surface here and are fatal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document exists but cannot be parsed. Fatal, no partial recovery.
    #[error("malformed ledger document {name}: {reason}")]
    Malformed { name: String, reason: String },

    /// Serialization failure while writing a document.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
