//! Core ledger logic for the Daybook inventory ledger.
//!
//! This crate is the heart of Daybook. It provides:
//! - [`Daybook`] -- the facade callers use: open today's ledger, append
//!   movements, read entries and summaries
//! - [`CarryForwardEngine`] / [`CarryPolicy`] -- the day-boundary transition
//!   that seeds a new day from prior net balances
//! - [`resolver`] -- stable item-number assignment across all ledgers
//! - [`report`] -- pure read-side projections (entry filter, per-item
//!   summary)
//!
//! All logic runs over the [`daybook_store::LedgerStore`] trait, so tests
//! substitute the in-memory backend for the filesystem one.

pub mod book;
pub mod carry;
pub mod error;
pub mod report;
pub mod resolver;

pub use book::{Daybook, MovementDraft};
pub use carry::{CarryForwardEngine, CarryPolicy};
pub use error::LedgerError;
pub use report::{ReportFilter, SummaryReport, SummaryRow};
