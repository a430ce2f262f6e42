//! Property-based tests for daybook-ledger.
//!
//! These verify the ledger's conservation invariants for arbitrary
//! movement sequences using proptest.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use daybook_ledger::{CarryPolicy, Daybook, MovementDraft, ReportFilter};
use daybook_store::{InMemoryLedgerStore, LedgerStore};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Widget".to_string()),
        Just("Bolt".to_string()),
        Just("Nut".to_string()),
        Just("Screw".to_string()),
    ]
}

fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|n| Decimal::new(n, 2))
}

/// A single add or remove call: (name, quantity, price, is_removal).
fn arb_movement() -> impl Strategy<Value = (String, i64, Decimal, bool)> {
    (arb_name(), 1i64..1_000, arb_price(), any::<bool>())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// For any sequence of add/remove calls within one day, the summary's
    /// net quantity per item equals the algebraic sum of the quantities
    /// passed (remove(q) == add(-q)).
    #[test]
    fn summary_net_equals_algebraic_sum(movements in prop::collection::vec(arb_movement(), 0..40)) {
        let store = InMemoryLedgerStore::new();
        let book = Daybook::open_at(&store, CarryPolicy::LastDayOnly, today()).unwrap();

        let mut expected: std::collections::BTreeMap<String, i64> = Default::default();
        for (name, quantity, price, is_removal) in movements {
            let draft = MovementDraft::new(name.clone(), quantity, price);
            if is_removal {
                book.remove_movement(draft).unwrap();
                *expected.entry(name).or_insert(0) -= quantity;
            } else {
                book.add_movement(draft).unwrap();
                *expected.entry(name).or_insert(0) += quantity;
            }
        }

        let report = book.summary(&ReportFilter::all()).unwrap();
        for (name, net) in expected {
            prop_assert_eq!(report.rows.get(&name).map_or(0, |row| row.net_quantity), net);
        }
    }

    /// Carry-forward preserves each item's historical net: the quantity
    /// seeded into the new day equals the net of the prior day, and items
    /// netting zero are dropped entirely.
    #[test]
    fn carry_forward_conserves_net(movements in prop::collection::vec(arb_movement(), 1..40)) {
        let store = InMemoryLedgerStore::new();
        let yesterday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let mut expected: std::collections::BTreeMap<String, i64> = Default::default();
        {
            let book = Daybook::open_at(&store, CarryPolicy::LastDayOnly, yesterday).unwrap();
            for (name, quantity, price, is_removal) in movements {
                let draft = MovementDraft::new(name.clone(), quantity, price);
                if is_removal {
                    book.remove_movement(draft).unwrap();
                    *expected.entry(name).or_insert(0) -= quantity;
                } else {
                    book.add_movement(draft).unwrap();
                    *expected.entry(name).or_insert(0) += quantity;
                }
            }
        }

        let book = Daybook::open_at(&store, CarryPolicy::LastDayOnly, today()).unwrap();
        let seeded = book.entries(&ReportFilter::all()).unwrap();

        for (name, net) in &expected {
            let carried: i64 = seeded
                .iter()
                .filter(|e| &e.item.name == name)
                .map(|e| e.item.quantity)
                .sum();
            prop_assert_eq!(carried, *net);
        }
        // Zero-net items never appear at all.
        for entry in &seeded {
            prop_assert_ne!(expected[&entry.item.name], 0);
        }
    }

    /// The all-history policy's carry document holds exactly the prior
    /// entries of non-zero-net items, so per-item nets are conserved there
    /// too.
    #[test]
    fn all_history_carry_document_conserves_net(movements in prop::collection::vec(arb_movement(), 1..40)) {
        let store = InMemoryLedgerStore::new();
        let yesterday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let mut expected: std::collections::BTreeMap<String, i64> = Default::default();
        {
            let book = Daybook::open_at(&store, CarryPolicy::LastDayOnly, yesterday).unwrap();
            for (name, quantity, price, is_removal) in movements {
                let signed = if is_removal { -quantity } else { quantity };
                book.add_movement(MovementDraft::new(name.clone(), signed, price)).unwrap();
                *expected.entry(name).or_insert(0) += signed;
            }
        }

        Daybook::open_at(&store, CarryPolicy::AllHistory, today()).unwrap();
        let carried = store.load_carry_forward(today()).unwrap();

        for (name, net) in &expected {
            let total: i64 = carried
                .iter()
                .filter(|e| &e.item.name == name)
                .map(|e| e.item.quantity)
                .sum();
            prop_assert_eq!(total, *net);
        }
    }

    /// Store round-trip: saving then loading returns the same entries in
    /// the same order.
    #[test]
    fn store_round_trip_is_order_preserving(movements in prop::collection::vec(arb_movement(), 0..40)) {
        let store = InMemoryLedgerStore::new();
        let book = Daybook::open_at(&store, CarryPolicy::LastDayOnly, today()).unwrap();

        let mut written = Vec::new();
        for (name, quantity, price, _) in movements {
            written.push(book.add_movement(MovementDraft::new(name, quantity, price)).unwrap());
        }

        prop_assert_eq!(store.load(today()).unwrap(), written);
    }
}
