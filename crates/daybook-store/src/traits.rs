use chrono::NaiveDate;
use daybook_types::MovementEntry;

use crate::error::StoreResult;

/// Storage boundary for daily ledger documents.
///
/// All implementations must satisfy these invariants:
/// - `load` of an absent date returns an empty ledger, never an error.
/// - `save` replaces the whole document; entry order is preserved exactly
///   (overwrite-on-write, not a true append -- concurrent writers would
///   lose data, a documented limitation of the single-process model).
/// - A malformed document surfaces as a fatal error, never as partial data.
/// - Carry-forward documents are a separate class: they never appear in
///   `list_dates` and never shadow a daily ledger.
pub trait LedgerStore: Send + Sync {
    /// Read the daily ledger for `date`. Empty if the document is absent.
    fn load(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>>;

    /// Replace the daily ledger for `date` with `entries`.
    fn save(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()>;

    /// Whether a daily ledger document exists for `date`.
    ///
    /// Distinct from `load` returning empty: an existing-but-empty document
    /// marks a day whose boundary transition already ran.
    fn exists(&self, date: NaiveDate) -> StoreResult<bool>;

    /// All dates with a daily ledger document, ascending.
    fn list_dates(&self) -> StoreResult<Vec<NaiveDate>>;

    /// Read the carry-forward document for `date`. Empty if absent.
    fn load_carry_forward(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>>;

    /// Replace the carry-forward document for `date`.
    fn save_carry_forward(&self, date: NaiveDate, entries: &[MovementEntry])
        -> StoreResult<()>;
}

impl<T: LedgerStore + ?Sized> LedgerStore for &T {
    fn load(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>> {
        (**self).load(date)
    }

    fn save(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()> {
        (**self).save(date, entries)
    }

    fn exists(&self, date: NaiveDate) -> StoreResult<bool> {
        (**self).exists(date)
    }

    fn list_dates(&self) -> StoreResult<Vec<NaiveDate>> {
        (**self).list_dates()
    }

    fn load_carry_forward(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>> {
        (**self).load_carry_forward(date)
    }

    fn save_carry_forward(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()> {
        (**self).save_carry_forward(date, entries)
    }
}
