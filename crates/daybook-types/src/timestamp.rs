//! Serde adapter for the ledger's on-disk timestamp format.
//!
//! Historical documents store entry timestamps as local wall-clock strings,
//! e.g. `2024-01-02 09:30:00`. This module keeps that format verbatim so
//! old and new documents stay mutually readable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// The wire format: `YYYY-MM-DD HH:MM:SS`, no zone, no sub-seconds.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
}
