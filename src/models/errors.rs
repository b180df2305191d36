use crate::types::AmountError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please enter all fields (missing: {})", .fields.join(", "))]
    MissingFields {
        fields: Vec<&'static str>
    },
    #[error("Amount [{value}] is not a valid amount: {source}")]
    InvalidAmount {
        value: String,
        source: AmountError
    },
    #[error("Date [{value}] is not a valid YYYY-MM-DD date: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError
    },
    #[error("Type [{value}] must be either Income or Expense")]
    InvalidType {
        value: String
    }
}
