use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Amount, TransactionId};

/// A single ledger entry as it is held in memory and persisted.
///
/// The persisted shape is a flat object with camelCase keys, e.g.
/// `{"id":1,"customerName":"Ali",...,"type":"Income"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique, monotonically minted identifier.
    pub id: TransactionId,
    #[serde(flatten)]
    pub details: TransactionDetails
}

/// Every user-editable field of a transaction. Editing replaces all of these
/// while the identifier is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub customer_name: String,
    pub description: String,
    pub amount: Amount,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub payment_method: String,
    pub category: String
}

impl Transaction {
    pub fn new(id: TransactionId, details: TransactionDetails) -> Self {
        Self { id, details }
    }

    pub fn is_income(&self) -> bool {
        self.details.transaction_type == TransactionType::Income
    }
}
