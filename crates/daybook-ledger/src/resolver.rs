//! Stable item-number assignment.
//!
//! An item number, once assigned to a name, keeps resolving to the same
//! value for that name across all future ledgers (first-writer-wins).
//! Resolution scans every daily ledger in ascending date order -- identical
//! to lexicographic filename order for the zero-padded date scheme -- and
//! within a ledger in entry order. The first matching entry that carries a
//! number wins; a name that never carried one gets `highest assigned + 1`,
//! starting at 1.
//!
//! The scan is O(total historical entries) per resolution, which is fine at
//! this scale; a persisted name index would replace it for larger data.

use daybook_store::LedgerStore;

use crate::error::LedgerError;

/// Resolve the item number for `name`, allocating a fresh one if the name
/// has never been numbered in any ledger.
pub fn resolve<S: LedgerStore + ?Sized>(store: &S, name: &str) -> Result<u32, LedgerError> {
    let mut highest = 0u32;
    for date in store.list_dates()? {
        for entry in store.load(date)? {
            let Some(number) = entry.item.item_number else {
                continue;
            };
            if entry.item.name == name {
                return Ok(number);
            }
            highest = highest.max(number);
        }
    }
    highest.checked_add(1).ok_or(LedgerError::ItemNumbersExhausted)
}
