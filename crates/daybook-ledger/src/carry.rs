//! Day-boundary carry-forward.
//!
//! Seeds a fresh day with the net non-zero balances of prior ledgers. Two
//! historical policies exist and are kept behind one engine rather than two
//! code paths:
//! - [`CarryPolicy::LastDayOnly`] nets the latest prior day and seeds
//!   today's (absent) ledger with the remainders.
//! - [`CarryPolicy::AllHistory`] nets every non-today ledger and copies the
//!   entries with a non-zero net into a separate `carry_forward` document.
//!
//! Both drop exact-zero nets, preserve the historical net quantity per item
//! (no leakage, no duplication), and produce output that depends only on
//! the multiset of prior entries.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

use daybook_store::LedgerStore;
use daybook_types::{Item, MovementEntry};

use crate::error::LedgerError;

/// Which prior ledgers feed the carry-forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarryPolicy {
    /// Net only the lexicographically-latest ledger before today and seed
    /// today's ledger with one remainder entry per non-zero item. Runs only
    /// when today's ledger does not exist yet.
    #[default]
    LastDayOnly,
    /// Net every non-today ledger and copy each entry whose item nets
    /// non-zero into `carry_forward_<today>`, leaving today's ledger empty.
    AllHistory,
}

/// Runs the day-boundary transition for a given date.
pub struct CarryForwardEngine {
    policy: CarryPolicy,
}

/// Netting key: the item number when assigned, otherwise the name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CarryKey {
    Number(u32),
    Name(String),
}

impl CarryKey {
    fn of(item: &Item) -> Self {
        match item.item_number {
            Some(number) => Self::Number(number),
            None => Self::Name(item.name.clone()),
        }
    }
}

impl CarryForwardEngine {
    pub fn new(policy: CarryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CarryPolicy {
        self.policy
    }

    /// Run the transition for `today`, stamping any seeded entries with
    /// `now`.
    ///
    /// Idempotent: an existing today-ledger makes `LastDayOnly` a no-op,
    /// and `AllHistory` recomputes the same carry document from the same
    /// prior entries.
    pub fn run<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<(), LedgerError> {
        match self.policy {
            CarryPolicy::LastDayOnly => self.carry_last_day(store, today, now),
            CarryPolicy::AllHistory => self.carry_all_history(store, today),
        }
    }

    fn carry_last_day<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<(), LedgerError> {
        if store.exists(today)? {
            debug!(%today, "ledger already exists, carry-forward skipped");
            return Ok(());
        }

        let latest_prior = store
            .list_dates()?
            .into_iter()
            .filter(|date| *date < today)
            .last();

        let Some(source) = latest_prior else {
            store.save(today, &[])?;
            debug!(%today, "no prior ledger, started empty");
            return Ok(());
        };

        let mut balances: BTreeMap<String, (i64, Option<u32>)> = BTreeMap::new();
        for entry in store.load(source)? {
            let slot = balances.entry(entry.item.name.clone()).or_insert((0, None));
            slot.0 += entry.item.quantity;
            if slot.1.is_none() {
                slot.1 = entry.item.item_number;
            }
        }

        let seeded: Vec<MovementEntry> = balances
            .into_iter()
            .filter(|(_, (net, _))| *net != 0)
            .map(|(name, (net, item_number))| {
                let mut item = Item::new(name, net, Decimal::ZERO);
                item.item_number = item_number;
                MovementEntry::new(now, item)
            })
            .collect();

        info!(from = %source, to = %today, carried = seeded.len(), "carry-forward seeded new day");
        store.save(today, &seeded)?;
        Ok(())
    }

    fn carry_all_history<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        today: NaiveDate,
    ) -> Result<(), LedgerError> {
        if !store.exists(today)? {
            store.save(today, &[])?;
        }

        let prior_dates: Vec<NaiveDate> = store
            .list_dates()?
            .into_iter()
            .filter(|date| *date < today)
            .collect();

        let mut totals: BTreeMap<CarryKey, i64> = BTreeMap::new();
        let mut history: Vec<MovementEntry> = Vec::new();
        for date in &prior_dates {
            let entries = store.load(*date)?;
            debug!(%date, entries = entries.len(), "netting prior ledger");
            for entry in entries {
                *totals.entry(CarryKey::of(&entry.item)).or_insert(0) += entry.item.quantity;
                history.push(entry);
            }
        }

        let carried: Vec<MovementEntry> = history
            .into_iter()
            .filter(|entry| totals[&CarryKey::of(&entry.item)] != 0)
            .collect();

        if carried.is_empty() {
            debug!(%today, "no non-zero balances to carry");
            return Ok(());
        }

        info!(%today, entries = carried.len(), "carry-forward document written");
        store.save_carry_forward(today, &carried)?;
        Ok(())
    }
}
