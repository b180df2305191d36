mod args;
mod config;
mod ledger;
mod models;
mod query;
mod report;
mod storage;
mod types;

use std::fs::File;
use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::args::{Args, Command, ThemeAction};
use crate::config::Config;
use crate::ledger::{SubmitOutcome, Theme, TransactionForm, TransactionStore};
use crate::query::{filter_by_window, totals, TransactionFilter};
use crate::storage::FileStorage;

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let config = Config::from_args(&args);
    debug!("Using data directory [{}] at log level [{}]", config.data_dir().display(), config.log_level());

    let today = Local::now().date_naive();
    let mut output = BufWriter::new(stdout().lock());

    run(args.command, config.storage(), today, &mut output)?;

    output.flush()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Views and CSV exports go to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run<W: Write>(command: Command, storage: FileStorage, today: NaiveDate, output: &mut W) -> Result<()> {
    match command {
        Command::Add(entry) => {
            let mut store = TransactionStore::load(storage);
            let mut form = TransactionForm::new();
            entry.apply_to(&mut form.draft);

            if let SubmitOutcome::Created(id) = form.submit(&mut store)? {
                writeln!(output, "Added transaction [{id}]")?;
            }

            report::render_totals(output, &totals(store.transactions()))?;
        }

        Command::Edit { id, entry } => {
            let mut store = TransactionStore::load(storage);
            let mut form = TransactionForm::new();

            if !form.begin_edit(&store, id) {
                writeln!(output, "Transaction [{id}] not found, nothing changed")?;
                return Ok(());
            }

            if entry.is_empty() {
                form.cancel();
                writeln!(output, "No changes given for transaction [{id}]")?;
                return Ok(());
            }

            entry.apply_to(&mut form.draft);

            match form.submit(&mut store)? {
                SubmitOutcome::Updated(id) => writeln!(output, "Updated transaction [{id}]")?,
                outcome => writeln!(output, "Transaction was not updated: {outcome:?}")?
            }

            report::render_totals(output, &totals(store.transactions()))?;
        }

        Command::Delete { id } => {
            let mut store = TransactionStore::load(storage);

            if store.remove(id) {
                writeln!(output, "Deleted transaction [{id}]")?;
            } else {
                writeln!(output, "Transaction [{id}] not found, nothing changed")?;
            }

            report::render_totals(output, &totals(store.transactions()))?;
        }

        Command::List(window) => {
            let store = TransactionStore::load(storage);
            let visible = filter_by_window(store.transactions(), window.window, today);
            debug!("Showing [{}] of [{}] transactions", visible.len(), store.len());

            if store.is_empty() {
                writeln!(output, "No transactions yet.")?;
            } else {
                report::render_list(output, &visible)?;
            }
        }

        Command::History(search) => {
            let store = TransactionStore::load(storage);
            let filter = TransactionFilter::new(search.window.window, search.search);
            let rows = filter.apply(store.transactions(), today);

            report::render_table(output, &rows)?;
            writeln!(output)?;
            report::render_totals(output, &totals(filter_by_window(store.transactions(), filter.window, today)))?;
        }

        Command::Totals(window) => {
            let store = TransactionStore::load(storage);

            report::render_totals(output, &totals(filter_by_window(store.transactions(), window.window, today)))?;
        }

        Command::Theme { action } => {
            let current = Theme::load(&storage);

            let theme = match action {
                None => current,
                Some(ThemeAction::Light) => Theme::Light,
                Some(ThemeAction::Dark) => Theme::Dark,
                Some(ThemeAction::Toggle) => current.toggled()
            };

            if action.is_some() {
                theme.save(&storage)?;
            }

            writeln!(output, "Theme: {theme}")?;
        }

        Command::Export { search, output: path } => {
            let store = TransactionStore::load(storage);
            let filter = TransactionFilter::new(search.window.window, search.search);
            let rows = filter.apply(store.transactions(), today);

            match path {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("Unable to create [{}]", path.display()))?;
                    report::export_csv(BufWriter::new(file), &rows)?;
                    writeln!(output, "Exported [{}] transactions to [{}]", rows.len(), path.display())?;
                }
                None => report::export_csv(&mut *output, &rows)?
            }
        }
    }

    Ok(())
}
