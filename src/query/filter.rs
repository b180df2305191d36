use crate::models::Transaction;
use crate::query::errors::QueryError;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How far back from today a view reaches.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum DateWindow {
    #[default]
    All,
    Last7Days,
    Last30Days
}

impl DateWindow {
    pub fn days(&self) -> Option<u64> {
        match self {
            DateWindow::All => None,
            DateWindow::Last7Days => Some(7),
            DateWindow::Last30Days => Some(30)
        }
    }

    /// The earliest date still inside the window, if the window is bounded.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }
}

impl Display for DateWindow {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DateWindow::All => write!(formatter, "all"),
            DateWindow::Last7Days => write!(formatter, "7"),
            DateWindow::Last30Days => write!(formatter, "30")
        }
    }
}

impl FromStr for DateWindow {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(DateWindow::All),
            "7" | "7d" | "last7" => Ok(DateWindow::Last7Days),
            "30" | "30d" | "last30" => Ok(DateWindow::Last30Days),
            other => Err(QueryError::UnknownWindow(other.to_string()))
        }
    }
}

/// Keeps transactions dated on or after `today` minus the window length.
pub fn filter_by_window<'a>(transactions: impl IntoIterator<Item = &'a Transaction>, window: DateWindow, today: NaiveDate) -> Vec<&'a Transaction> {
    match window.cutoff(today) {
        None => transactions.into_iter().collect(),
        Some(cutoff) => transactions.into_iter()
            .filter(|transaction| transaction.details.date >= cutoff)
            .collect()
    }
}

/// Keeps transactions whose customer name, description or category contains `query`,
/// ignoring case. An empty query keeps everything; spaces in the query are matched literally.
pub fn filter_by_text<'a>(transactions: impl IntoIterator<Item = &'a Transaction>, query: &str) -> Vec<&'a Transaction> {
    let needle = query.to_lowercase();

    if needle.is_empty() {
        return transactions.into_iter().collect();
    }

    transactions.into_iter()
        .filter(|transaction| {
            let details = &transaction.details;

            [&details.customer_name, &details.description, &details.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// A window and a search term, applied in that order.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub window: DateWindow,
    pub query: String
}

impl TransactionFilter {
    pub fn new(window: DateWindow, query: impl Into<String>) -> Self {
        Self {
            window,
            query: query.into()
        }
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction], today: NaiveDate) -> Vec<&'a Transaction> {
        filter_by_text(filter_by_window(transactions, self.window, today), &self.query)
    }
}
