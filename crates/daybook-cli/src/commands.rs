use std::collections::BTreeMap;

use daybook_ledger::{CarryPolicy, Daybook, MovementDraft, ReportFilter, SummaryReport};
use daybook_store::{FsLedgerStore, LedgerStore};
use daybook_types::MovementEntry;

use crate::cli::{Cli, Command, FilterArgs, MovementArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = FsLedgerStore::with_prefix(&cli.dir, &cli.prefix)?;
    let policy: CarryPolicy = cli.policy.into();
    let book = Daybook::open(store, policy)?;

    match cli.command {
        Command::Add(args) => cmd_movement(&book, args, false),
        Command::Remove(args) => cmd_movement(&book, args, true),
        Command::Entries(args) => cmd_entries(&book, &args),
        Command::Summary(args) => cmd_summary(&book, &args),
        Command::CarryForward(_) => cmd_carry_forward(&book, policy),
    }
}

fn cmd_movement(
    book: &Daybook<FsLedgerStore>,
    args: MovementArgs,
    is_removal: bool,
) -> anyhow::Result<()> {
    let mut draft = MovementDraft::new(args.name, args.quantity, args.price);
    draft.batch_number = args.batch_number;
    draft.item_number = args.item_number;
    draft.expire_date = args.expire_date;
    if !args.extra_parameters.is_empty() {
        let extras: BTreeMap<String, serde_json::Value> = args
            .extra_parameters
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::String(value)))
            .collect();
        draft.extra_parameters = Some(extras);
    }

    let entry = if is_removal {
        book.remove_movement(draft)?
    } else {
        book.add_movement(draft)?
    };

    println!(
        "Recorded {} x {} (item number {}) in ledger {}",
        entry.item.quantity,
        entry.item.name,
        entry.item.item_number.map_or("N/A".into(), |n| n.to_string()),
        book.today(),
    );
    Ok(())
}

fn cmd_entries(book: &Daybook<FsLedgerStore>, args: &FilterArgs) -> anyhow::Result<()> {
    let entries = book.entries(&filter_from(args))?;
    if entries.is_empty() {
        println!("No entries found for the specified item.");
        return Ok(());
    }

    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

fn cmd_summary(book: &Daybook<FsLedgerStore>, args: &FilterArgs) -> anyhow::Result<()> {
    let report = book.summary(&filter_from(args))?;
    if report.is_empty() {
        println!("No entries found for the specified item.");
        return Ok(());
    }

    print_summary(&report, args.name.is_none() && args.item_number.is_none());
    Ok(())
}

fn cmd_carry_forward(book: &Daybook<FsLedgerStore>, policy: CarryPolicy) -> anyhow::Result<()> {
    // Opening the book already ran the transition for today.
    match policy {
        CarryPolicy::LastDayOnly => {
            let seeded = book.entries(&ReportFilter::all())?;
            println!(
                "Ledger {} ready, {} carried entr{}",
                book.today(),
                seeded.len(),
                if seeded.len() == 1 { "y" } else { "ies" },
            );
        }
        CarryPolicy::AllHistory => {
            let carried = book.store().load_carry_forward(book.today())?;
            if carried.is_empty() {
                println!("No non-zero sum entries found in any file");
            } else {
                println!(
                    "Carry-forward document for {} holds {} entries",
                    book.today(),
                    carried.len(),
                );
            }
        }
    }
    Ok(())
}

fn filter_from(args: &FilterArgs) -> ReportFilter {
    ReportFilter {
        name: args.name.clone(),
        item_number: args.item_number,
    }
}

fn print_entry(entry: &MovementEntry) {
    let item = &entry.item;
    println!("Timestamp: {}", entry.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("Item Name: {}", item.name);
    println!("Quantity: {}", item.quantity);
    println!("Price: {:.2}", item.price);
    println!("Batch Number: {}", item.batch_number.as_deref().unwrap_or("N/A"));
    println!(
        "Item Number: {}",
        item.item_number.map_or("N/A".into(), |n| n.to_string())
    );
    println!(
        "Expire Date: {}",
        item.expire_date.map_or("N/A".into(), |d| d.to_string())
    );
    match &item.extra_parameters {
        Some(extras) => {
            let rendered: Vec<String> =
                extras.iter().map(|(k, v)| format!("{k}={v}")).collect();
            println!("Extra Parameters: {}", rendered.join(", "));
        }
        None => println!("Extra Parameters: N/A"),
    }
    println!("\n{}\n", "-".repeat(30));
}

fn print_summary(report: &SummaryReport, include_total: bool) {
    println!("\nItem-wise Summary:");
    for (name, row) in &report.rows {
        let numbers = if row.item_numbers.is_empty() {
            "N/A".to_string()
        } else {
            row.item_numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("\nItem Name: {name}");
        println!("Item Number(s): {numbers}");
        println!("Net Quantity: {}", row.net_quantity);
        println!("Average Price: {:.2}", row.average_price);
    }

    if include_total {
        println!("\nSummary:");
        println!("Net Quantity: {}", report.total_net_quantity());
    }
}
