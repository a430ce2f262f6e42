//! Filename scheme for ledger documents.
//!
//! Daily ledgers are `<prefix>_<YYYY-MM-DD>.json`; the default prefix is
//! `inventory` and the early variant's `database` is accepted via
//! configuration. Carry-forward documents are
//! `carry_forward_<YYYY-MM-DD>.json` and live in the same flat directory.
//! The zero-padded date makes lexicographic filename order identical to
//! chronological order.

use chrono::NaiveDate;

/// Default daily-ledger filename prefix.
pub const DEFAULT_PREFIX: &str = "inventory";

/// Prefix of the separate carry-forward document class.
pub const CARRY_FORWARD_PREFIX: &str = "carry_forward";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn daily_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.json", date.format(DATE_FORMAT))
}

pub fn carry_forward_filename(date: NaiveDate) -> String {
    format!("{CARRY_FORWARD_PREFIX}_{}.json", date.format(DATE_FORMAT))
}

/// Parse a daily ledger filename back to its date.
///
/// Returns `None` for anything that is not a daily ledger of the given
/// prefix: carry-forward documents, editor backups (any name containing
/// `~`), non-JSON files, and foreign prefixes.
pub fn parse_daily_filename(prefix: &str, filename: &str) -> Option<NaiveDate> {
    if filename.contains('~') {
        return None;
    }
    let stem = filename.strip_suffix(".json")?;
    let date_part = stem.strip_prefix(prefix)?.strip_prefix('_')?;
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_filename_is_date_stamped() {
        assert_eq!(
            daily_filename("inventory", date(2024, 1, 2)),
            "inventory_2024-01-02.json"
        );
        assert_eq!(
            daily_filename("database", date(2024, 1, 2)),
            "database_2024-01-02.json"
        );
    }

    #[test]
    fn carry_forward_filename_has_own_prefix() {
        assert_eq!(
            carry_forward_filename(date(2024, 1, 2)),
            "carry_forward_2024-01-02.json"
        );
    }

    #[test]
    fn parse_round_trips() {
        let d = date(2024, 1, 2);
        let name = daily_filename("inventory", d);
        assert_eq!(parse_daily_filename("inventory", &name), Some(d));
    }

    #[test]
    fn parse_rejects_foreign_files() {
        assert_eq!(parse_daily_filename("inventory", "inventory_2024-01-02.json~"), None);
        assert_eq!(parse_daily_filename("inventory", "inventory_2024-01-02.txt"), None);
        assert_eq!(parse_daily_filename("inventory", "database_2024-01-02.json"), None);
        assert_eq!(parse_daily_filename("inventory", "carry_forward_2024-01-02.json"), None);
        assert_eq!(parse_daily_filename("inventory", "inventory_2024-13-02.json"), None);
        assert_eq!(parse_daily_filename("inventory", "notes.json"), None);
    }

    #[test]
    fn lexicographic_order_matches_chronological() {
        let earlier = daily_filename("inventory", date(2024, 9, 30));
        let later = daily_filename("inventory", date(2024, 10, 1));
        assert!(earlier < later);
    }
}
