//! Document storage for the Daybook inventory ledger.
//!
//! One JSON document per calendar day, identified by a date-stamped
//! filename. This crate provides:
//! - [`LedgerStore`] -- the storage trait boundary the ledger logic runs over
//! - [`FsLedgerStore`] -- flat directory of `<prefix>_<date>.json` files
//! - [`InMemoryLedgerStore`] -- map-backed implementation for tests and
//!   embedding
//! - [`naming`] -- the filename scheme shared by both document classes

pub mod error;
pub mod fs;
pub mod memory;
pub mod naming;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsLedgerStore;
pub use memory::InMemoryLedgerStore;
pub use traits::LedgerStore;
