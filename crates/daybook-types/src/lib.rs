//! Data model for the Daybook inventory ledger.
//!
//! This crate defines the wire types shared by every other Daybook crate:
//! - [`Item`] -- a named stock item with a signed quantity delta and price
//! - [`MovementEntry`] -- a timestamped movement, the unit of every ledger
//! - [`timestamp`] -- the serde adapter for the on-disk timestamp format
//!
//! The JSON field names and formats are kept verbatim compatible with the
//! historical ledger documents, so files written by earlier tooling load
//! unchanged.

pub mod item;
pub mod timestamp;

pub use item::{Item, MovementEntry};
