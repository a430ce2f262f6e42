//! The daily ledger facade.
//!
//! [`Daybook`] is what callers hold: opening it pins a calendar date, runs
//! the carry-forward transition exactly once per day-boundary crossing, and
//! exposes append (add/remove movement) and read (entries/summary)
//! operations over that day's document.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use daybook_store::LedgerStore;
use daybook_types::{Item, MovementEntry};

use crate::carry::{CarryForwardEngine, CarryPolicy};
use crate::error::LedgerError;
use crate::report::{self, ReportFilter, SummaryReport};
use crate::resolver;

/// Input for a stock movement. Optional fields default to absent;
/// `item_number` is resolved automatically when not supplied.
#[derive(Clone, Debug, Default)]
pub struct MovementDraft {
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub batch_number: Option<String>,
    pub item_number: Option<u32>,
    pub expire_date: Option<NaiveDate>,
    pub extra_parameters: Option<BTreeMap<String, serde_json::Value>>,
}

impl MovementDraft {
    pub fn new(name: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            ..Self::default()
        }
    }
}

/// One day's ledger, bound to a store and a carry-forward policy.
pub struct Daybook<S: LedgerStore> {
    store: S,
    today: NaiveDate,
}

impl<S: LedgerStore> Daybook<S> {
    /// Open the book for the current local date. If this is the first
    /// access of the day, the carry-forward engine runs before the book is
    /// returned.
    pub fn open(store: S, policy: CarryPolicy) -> Result<Self, LedgerError> {
        let now = Local::now().naive_local();
        Self::open_inner(store, policy, now.date(), now)
    }

    /// Open the book pinned to an explicit date. Used by tests and replays;
    /// seeded carry-forward entries are stamped at midnight of that date.
    pub fn open_at(store: S, policy: CarryPolicy, today: NaiveDate) -> Result<Self, LedgerError> {
        Self::open_inner(store, policy, today, today.and_time(NaiveTime::MIN))
    }

    fn open_inner(
        store: S,
        policy: CarryPolicy,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<Self, LedgerError> {
        CarryForwardEngine::new(policy).run(&store, today, now)?;
        Ok(Self { store, today })
    }

    /// The date this book is bound to.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a movement to today's ledger and persist the full document.
    ///
    /// Resolves the item number when the draft carries none and stamps the
    /// current local time. Returns the entry as written.
    pub fn add_movement(&self, draft: MovementDraft) -> Result<MovementEntry, LedgerError> {
        self.append(draft, Local::now().naive_local())
    }

    /// `add_movement` with the quantity negated. No validation that the
    /// removal keeps stock non-negative; going negative is allowed.
    pub fn remove_movement(&self, mut draft: MovementDraft) -> Result<MovementEntry, LedgerError> {
        draft.quantity = -draft.quantity;
        self.add_movement(draft)
    }

    /// Append with an explicit timestamp. Exposed for tests and replays.
    pub fn add_movement_at(
        &self,
        draft: MovementDraft,
        timestamp: NaiveDateTime,
    ) -> Result<MovementEntry, LedgerError> {
        self.append(draft, timestamp)
    }

    fn append(
        &self,
        draft: MovementDraft,
        timestamp: NaiveDateTime,
    ) -> Result<MovementEntry, LedgerError> {
        let item_number = match draft.item_number {
            Some(number) => number,
            None => resolver::resolve(&self.store, &draft.name)?,
        };

        let entry = MovementEntry::new(
            timestamp,
            Item {
                name: draft.name,
                quantity: draft.quantity,
                price: draft.price,
                batch_number: draft.batch_number,
                item_number: Some(item_number),
                expire_date: draft.expire_date,
                extra_parameters: draft.extra_parameters,
            },
        );

        let mut entries = self.store.load(self.today)?;
        entries.push(entry.clone());
        self.store.save(self.today, &entries)?;
        Ok(entry)
    }

    /// Today's entries matching the filter, in ledger order.
    pub fn entries(&self, filter: &ReportFilter) -> Result<Vec<MovementEntry>, LedgerError> {
        Ok(report::filter_entries(&self.store.load(self.today)?, filter))
    }

    /// Item-wise summary of today's ledger.
    pub fn summary(&self, filter: &ReportFilter) -> Result<SummaryReport, LedgerError> {
        Ok(report::summarize(&self.store.load(self.today)?, filter))
    }
}
