//! Command line interface for the ledger.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::models::TransactionDraft;
use crate::query::DateWindow;
use crate::types::TransactionId;

/// pocket-ledger: record income and expenses and keep a running balance.
///
/// Entries are kept in a local data directory, one file per stored key, and every
/// change rewrites the full collection.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Directory holding the ledger's stored keys. Defaults to the platform data directory.
    #[arg(long, env = "POCKET_LEDGER_HOME", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity written to stderr: error, warn, info, debug or trace.
    #[arg(long, default_value = "error", value_parser = parse_log_level, global = true)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new transaction.
    Add(EntryArgs),
    /// Replace the fields of an existing transaction. Fields that are not given keep their value.
    Edit {
        id: TransactionId,
        #[command(flatten)]
        entry: EntryArgs
    },
    /// Delete a transaction.
    Delete {
        id: TransactionId
    },
    /// Show the compact transaction list.
    List(WindowArgs),
    /// Show the full history table with totals.
    History(SearchArgs),
    /// Show income, expense and balance.
    Totals(WindowArgs),
    /// Show or change the colour theme.
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>
    },
    /// Write the history table as CSV.
    Export {
        #[command(flatten)]
        search: SearchArgs,
        /// File to write. Writes to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>
    }
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct EntryArgs {
    #[arg(long)]
    pub customer: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// Calendar date as YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<String>,
    /// Income or Expense.
    #[arg(long = "type")]
    pub transaction_type: Option<String>,
    #[arg(long)]
    pub payment_method: Option<String>,
    #[arg(long)]
    pub category: Option<String>
}

#[derive(Debug, Clone, ClapArgs)]
pub struct WindowArgs {
    /// How far back to look: all, 7 or 30 days.
    #[arg(long, default_value = "all")]
    pub window: DateWindow
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SearchArgs {
    #[command(flatten)]
    pub window: WindowArgs,
    /// Case-insensitive text matched against customer, description and category.
    #[arg(long, default_value = "")]
    pub search: String
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(format!("Invalid log level '{level}', expected one of: error, warn, info, debug, trace, off"))
    }
}

impl EntryArgs {
    /// True when no field was given on the command line.
    pub fn is_empty(&self) -> bool {
        [
            &self.customer,
            &self.description,
            &self.amount,
            &self.date,
            &self.transaction_type,
            &self.payment_method,
            &self.category
        ].iter().all(|field| field.is_none())
    }

    /// Copies every field given on the command line into `draft`, leaving the rest as they are.
    pub fn apply_to(&self, draft: &mut TransactionDraft) {
        let fields = [
            (&self.customer, &mut draft.customer_name),
            (&self.description, &mut draft.description),
            (&self.amount, &mut draft.amount),
            (&self.date, &mut draft.date),
            (&self.transaction_type, &mut draft.transaction_type),
            (&self.payment_method, &mut draft.payment_method),
            (&self.category, &mut draft.category)
        ];

        for (given, field) in fields {
            if let Some(value) = given {
                *field = value.clone();
            }
        }
    }
}
