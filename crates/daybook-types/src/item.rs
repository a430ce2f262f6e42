use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// A named stock item inside a movement entry.
///
/// Field names match the historical JSON documents exactly; optional fields
/// are omitted from the serialized form when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Signed quantity delta. A removal is an addition with negated quantity.
    pub quantity: i64,
    /// Unit price, serialized as a JSON number.
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    /// Stable per-name identifier. First-writer-wins across all ledgers:
    /// once a name has a number, every later resolution returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<NaiveDate>,
    /// Free-form extras. `BTreeMap` keeps serialization deterministic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_parameters: Option<BTreeMap<String, serde_json::Value>>,
}

impl Item {
    /// Item with only the mandatory fields set.
    pub fn new(name: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            batch_number: None,
            item_number: None,
            expire_date: None,
            extra_parameters: None,
        }
    }

    /// Same item with the given item number attached.
    pub fn with_item_number(mut self, number: u32) -> Self {
        self.item_number = Some(number);
        self
    }
}

/// A timestamped stock movement.
///
/// Immutable once written: a daily ledger is an append-only ordered sequence
/// of these, and carry-forward only ever copies or re-derives them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementEntry {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS` on the wire.
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub item: Item,
}

impl MovementEntry {
    pub fn new(timestamp: NaiveDateTime, item: Item) -> Self {
        Self { timestamp, item }
    }
}
