use chrono::NaiveDate;
use std::str::FromStr;

use crate::models::errors::ValidationError;
use crate::models::{TransactionDetails, TransactionType};
use crate::types::Amount;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The raw text of a transaction form before it has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub customer_name: String,
    pub description: String,
    pub amount: String,
    pub date: String,
    pub transaction_type: String,
    pub payment_method: String,
    pub category: String
}

impl TransactionDraft {
    /// Fills a draft with the values of an existing transaction, as happens when an
    /// entry is picked for editing.
    pub fn from_details(details: &TransactionDetails) -> Self {
        Self {
            customer_name: details.customer_name.clone(),
            description: details.description.clone(),
            amount: details.amount.to_string(),
            date: details.date.format(DATE_FORMAT).to_string(),
            transaction_type: details.transaction_type.to_string(),
            payment_method: details.payment_method.clone(),
            category: details.category.clone()
        }
    }

    /// Checks that every field is present and parses the typed ones.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - Any field is empty after trimming.
    /// - The amount, date or type cannot be parsed.
    pub fn validate(&self) -> Result<TransactionDetails, ValidationError> {
        let missing: Vec<&'static str> = self.fields().into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let amount = Amount::from_str(&self.amount).map_err(|source| ValidationError::InvalidAmount {
            value: self.amount.trim().to_string(),
            source
        })?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|source| ValidationError::InvalidDate {
            value: self.date.trim().to_string(),
            source
        })?;

        let transaction_type = TransactionType::from_str(&self.transaction_type)?;

        Ok(TransactionDetails {
            customer_name: self.customer_name.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            date,
            transaction_type,
            payment_method: self.payment_method.trim().to_string(),
            category: self.category.trim().to_string()
        })
    }

    /// Clears the per-entry fields. Type, payment method and category are kept so
    /// consecutive entries of the same kind need less typing.
    pub fn clear_entry(&mut self) {
        self.customer_name.clear();
        self.description.clear();
        self.amount.clear();
        self.date.clear();
    }

    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("customer name", self.customer_name.as_str()),
            ("description", self.description.as_str()),
            ("amount", self.amount.as_str()),
            ("date", self.date.as_str()),
            ("type", self.transaction_type.as_str()),
            ("payment method", self.payment_method.as_str()),
            ("category", self.category.as_str())
        ]
    }
}
