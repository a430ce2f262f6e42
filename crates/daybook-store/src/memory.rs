use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use daybook_types::MovementEntry;

use crate::error::StoreResult;
use crate::traits::LedgerStore;

/// In-memory, map-backed ledger store.
///
/// Intended for tests and embedding. Documents are held behind a `RwLock`
/// and cloned on read/write, mirroring the full-document replacement
/// semantics of the filesystem store.
pub struct InMemoryLedgerStore {
    inner: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    daily: BTreeMap<NaiveDate, Vec<MovementEntry>>,
    carry: BTreeMap<NaiveDate, Vec<MovementEntry>>,
}

impl InMemoryLedgerStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryState::default()),
        }
    }

    /// Number of daily ledger documents currently held.
    pub fn daily_count(&self) -> usize {
        self.inner.read().expect("lock poisoned").daily.len()
    }

    /// Remove all documents.
    pub fn clear(&self) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.daily.clear();
        state.carry.clear();
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.daily.get(&date).cloned().unwrap_or_default())
    }

    fn save(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        state.daily.insert(date, entries.to_vec());
        Ok(())
    }

    fn exists(&self, date: NaiveDate) -> StoreResult<bool> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.daily.contains_key(&date))
    }

    fn list_dates(&self) -> StoreResult<Vec<NaiveDate>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.daily.keys().copied().collect())
    }

    fn load_carry_forward(&self, date: NaiveDate) -> StoreResult<Vec<MovementEntry>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.carry.get(&date).cloned().unwrap_or_default())
    }

    fn save_carry_forward(&self, date: NaiveDate, entries: &[MovementEntry]) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        state.carry.insert(date, entries.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryLedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLedgerStore")
            .field("daily_count", &self.daily_count())
            .finish()
    }
}
