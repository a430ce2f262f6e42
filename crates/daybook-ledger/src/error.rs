use daybook_store::StoreError;

/// Errors from ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Underlying document storage failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No item number left to allocate.
    #[error("item number space exhausted")]
    ItemNumbersExhausted,
}
