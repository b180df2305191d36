mod form;
mod theme;
mod transaction_store;

pub use form::{SubmitOutcome, TransactionForm};
pub use theme::Theme;
pub use transaction_store::TransactionStore;
