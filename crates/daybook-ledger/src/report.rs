//! Read-side projections over a loaded ledger.
//!
//! Pure functions, no state mutation: filtering a ledger's entries and the
//! per-item summary (net quantity, average price, item numbers). Unknown
//! name or number filters yield an empty result, not an error.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use daybook_types::{Item, MovementEntry};

/// Optional name / item-number restriction for reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub name: Option<String>,
    pub item_number: Option<u32>,
}

impl ReportFilter {
    /// Match everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            item_number: None,
        }
    }

    pub fn by_item_number(number: u32) -> Self {
        Self {
            name: None,
            item_number: Some(number),
        }
    }

    fn matches(&self, item: &Item) -> bool {
        self.name.as_deref().map_or(true, |name| item.name == name)
            && self
                .item_number
                .map_or(true, |number| item.item_number == Some(number))
    }
}

/// Entries matching the filter, in ledger order.
pub fn filter_entries(entries: &[MovementEntry], filter: &ReportFilter) -> Vec<MovementEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(&entry.item))
        .cloned()
        .collect()
}

/// Per-item aggregate over the filtered entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    /// Algebraic sum of all quantities for the item.
    pub net_quantity: i64,
    /// Plain mean of the entry prices, rounded to two decimal places.
    pub average_price: Decimal,
    /// Every item number observed for the name.
    pub item_numbers: BTreeSet<u32>,
}

/// Item-wise summary keyed by name, plus the grand total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryReport {
    pub rows: BTreeMap<String, SummaryRow>,
}

impl SummaryReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Net quantity summed over every row.
    pub fn total_net_quantity(&self) -> i64 {
        self.rows.values().map(|row| row.net_quantity).sum()
    }
}

/// Summarize the filtered entries item by item.
pub fn summarize(entries: &[MovementEntry], filter: &ReportFilter) -> SummaryReport {
    struct Acc {
        net: i64,
        price_sum: Decimal,
        count: u32,
        numbers: BTreeSet<u32>,
    }

    let mut by_name: BTreeMap<String, Acc> = BTreeMap::new();
    for entry in entries.iter().filter(|entry| filter.matches(&entry.item)) {
        let acc = by_name.entry(entry.item.name.clone()).or_insert(Acc {
            net: 0,
            price_sum: Decimal::ZERO,
            count: 0,
            numbers: BTreeSet::new(),
        });
        acc.net += entry.item.quantity;
        acc.price_sum += entry.item.price;
        acc.count += 1;
        if let Some(number) = entry.item.item_number {
            acc.numbers.insert(number);
        }
    }

    let rows = by_name
        .into_iter()
        .map(|(name, acc)| {
            let average_price = (acc.price_sum / Decimal::from(acc.count)).round_dp(2);
            (
                name,
                SummaryRow {
                    net_quantity: acc.net,
                    average_price,
                    item_numbers: acc.numbers,
                },
            )
        })
        .collect();

    SummaryReport { rows }
}
