mod errors;
mod filter;
mod totals;

pub use filter::{filter_by_window, DateWindow, TransactionFilter};
pub use totals::{totals, Totals};
