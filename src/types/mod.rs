mod amount;
mod errors;

pub use amount::Amount;
pub use errors::AmountError;

pub type TransactionId = i64;
