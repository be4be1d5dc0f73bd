use anyhow::{Context as _, Result};
use console::style;
use std::path::Path;

use crate::args::Args;
use crate::config::Config;
use crate::db::ProcessedStore;
use crate::filter;
use crate::format::CurrencyFormatter;
use crate::ledger::Ledger;
use crate::reader::{CsvLedgerReader, LedgerReader as _};
use crate::terminal::{BulletPointPrinter, ConsoleStyle, LineWriter};
use crate::workflow::ConfirmationWorkflow;

pub fn main(args: Args) -> Result<()> {
    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    let mut store = ProcessedStore::open(&args.database)
        .with_context(|| format!("Failed to load database {}", args.database.display()))?;
    let mut ledger = CsvLedgerReader::new(&config, &store)
        .read(&args.path, &args.profile)
        .with_context(|| format!("Failed to read ledger {}", args.path.display()))?;

    let console_style = ConsoleStyle;
    println!("{}", style_header("Processing ledger:"));
    print_ledger(
        &BulletPointPrinter::new(console_style),
        &args.profile,
        &args.path,
        &ledger,
    );

    let formatter = CurrencyFormatter::new(ledger.currency(), config.display);
    let outcome = ConfirmationWorkflow::new(&console_style, &formatter)
        .with_display_limit(args.display_limit)
        .run(&mut ledger, &mut store)?;
    log::info!("Finished with {:?}", outcome);
    Ok(())
}

fn print_ledger<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    profile: &str,
    path: &Path,
    ledger: &Ledger,
) {
    printer.print_field("Profile", style(profile).cyan().bold());
    printer.print_field("File", style(path.display()).magenta());
    printer.print_field("Currency", ledger.currency());
    printer.print_field("Transactions", ledger.len());
    printer
        .indent()
        .print_field("Unprocessed", filter::unprocessed(ledger).len());
}

fn style_header(header: &str) -> console::StyledObject<&str> {
    style(header).bold().underlined()
}
