use clap::{Args, Parser, Subcommand};

use daybook_ledger::CarryPolicy;

#[derive(Parser)]
#[command(
    name = "daybook",
    about = "Daybook - flat-file inventory ledger with daily carry-forward",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Root directory holding the ledger documents
    #[arg(long, global = true, default_value = "ledger")]
    pub dir: String,

    /// Daily filename prefix (`inventory`, or the early variant `database`)
    #[arg(long, global = true, default_value = "inventory")]
    pub prefix: String,

    /// Day-boundary carry-forward policy
    #[arg(long, global = true, default_value = "last-day")]
    pub policy: PolicyArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PolicyArg {
    /// Seed today's ledger from the latest prior day's net balances
    LastDay,
    /// Copy all non-zero-net history into a carry_forward document
    AllHistory,
}

impl From<PolicyArg> for CarryPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LastDay => CarryPolicy::LastDayOnly,
            PolicyArg::AllHistory => CarryPolicy::AllHistory,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a stock addition in today's ledger
    Add(MovementArgs),
    /// Record a stock removal (an addition with negated quantity)
    Remove(MovementArgs),
    /// Print today's entries
    Entries(FilterArgs),
    /// Print the item-wise summary of today's ledger
    Summary(FilterArgs),
    /// Run the day-boundary carry-forward for today
    CarryForward(CarryForwardArgs),
}

#[derive(Args)]
pub struct MovementArgs {
    /// Item name
    pub name: String,
    /// Quantity moved (always positive; `remove` negates it)
    pub quantity: i64,
    /// Unit price
    pub price: rust_decimal::Decimal,
    #[arg(long)]
    pub batch_number: Option<String>,
    /// Explicit item number; resolved from history when omitted
    #[arg(long)]
    pub item_number: Option<u32>,
    /// Expiry date, YYYY-MM-DD
    #[arg(long)]
    pub expire_date: Option<chrono::NaiveDate>,
    /// Extra key=value parameters, repeatable
    #[arg(long = "extra", value_parser = parse_key_value)]
    pub extra_parameters: Vec<(String, String)>,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Restrict to one item name
    #[arg(long)]
    pub name: Option<String>,
    /// Restrict to one item number
    #[arg(long)]
    pub item_number: Option<u32>,
}

#[derive(Args)]
pub struct CarryForwardArgs {}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from(["daybook", "add", "Widget", "10", "2.50"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.name, "Widget");
            assert_eq!(args.quantity, 10);
            assert_eq!(args.price.to_string(), "2.50");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_with_options() {
        let cli = Cli::try_parse_from([
            "daybook", "add", "Widget", "10", "2.50",
            "--batch-number", "B-17",
            "--item-number", "4",
            "--expire-date", "2025-06-30",
            "--extra", "supplier=Acme",
        ]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.batch_number, Some("B-17".into()));
            assert_eq!(args.item_number, Some(4));
            assert!(args.expire_date.is_some());
            assert_eq!(args.extra_parameters, vec![("supplier".into(), "Acme".into())]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_remove() {
        let cli = Cli::try_parse_from(["daybook", "remove", "Widget", "3", "2.50"]).unwrap();
        assert!(matches!(cli.command, Command::Remove(_)));
    }

    #[test]
    fn parse_entries_with_filter() {
        let cli = Cli::try_parse_from(["daybook", "entries", "--name", "Widget"]).unwrap();
        if let Command::Entries(args) = cli.command {
            assert_eq!(args.name, Some("Widget".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_summary() {
        let cli = Cli::try_parse_from(["daybook", "summary", "--item-number", "2"]).unwrap();
        if let Command::Summary(args) = cli.command {
            assert_eq!(args.item_number, Some(2));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_carry_forward_with_policy() {
        let cli = Cli::try_parse_from([
            "daybook", "--policy", "all-history", "carry-forward",
        ]).unwrap();
        assert!(matches!(cli.policy, PolicyArg::AllHistory));
        assert!(matches!(cli.command, Command::CarryForward(_)));
    }

    #[test]
    fn parse_global_dir_and_prefix() {
        let cli = Cli::try_parse_from([
            "daybook", "--dir", "/tmp/ledger", "--prefix", "database", "summary",
        ]).unwrap();
        assert_eq!(cli.dir, "/tmp/ledger");
        assert_eq!(cli.prefix, "database");
    }

    #[test]
    fn rejects_malformed_extra() {
        let result = Cli::try_parse_from([
            "daybook", "add", "Widget", "1", "1.00", "--extra", "no-separator",
        ]);
        assert!(result.is_err());
    }
}
