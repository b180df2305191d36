use crate::models::{Transaction, TransactionType};
use crate::types::{Amount, TransactionId};
use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 8] = ["id", "date", "customer", "description", "type", "amount", "payment_method", "category"];

#[derive(Serialize)]
struct ExportRow<'a> {
    id: TransactionId,
    date: NaiveDate,
    customer: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    amount: Amount,
    payment_method: &'a str,
    category: &'a str
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        let details = &transaction.details;

        Self {
            id: transaction.id,
            date: details.date,
            customer: &details.customer_name,
            description: &details.description,
            transaction_type: details.transaction_type,
            amount: details.amount,
            payment_method: &details.payment_method,
            category: &details.category
        }
    }
}

/// Writes transactions as CSV with a header row.
pub fn export_csv<W: Write>(output: W, transactions: &[&Transaction]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(HEADER)?;

    for transaction in transactions {
        writer.serialize(ExportRow::from(*transaction))?;
    }

    writer.flush()?;

    Ok(())
}
