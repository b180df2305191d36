use crate::models::Transaction;
use crate::query::Totals;
use crate::types::Amount;
use std::io::{self, Write};

const CURRENCY_SYMBOL: &str = "₺";

/// Formats an amount the Turkish lira way, e.g. `₺1.234,56`.
///
/// Works on the integer minor units, so every representable amount prints exactly.
pub fn format_currency(amount: Amount) -> String {
    let magnitude = amount.minor_units().unsigned_abs();
    let per_major = Amount::MINOR_UNITS_PER_MAJOR.unsigned_abs();
    let whole = (magnitude / per_major).to_string();
    let cents = magnitude % per_major;

    // Thousands take a dot and decimals a comma
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_negative() { "-" } else { "" };

    format!("{sign}{CURRENCY_SYMBOL}{grouped},{cents:02}")
}

fn signed_amount(transaction: &Transaction) -> String {
    let sign = if transaction.is_income() { "+" } else { "-" };
    format!("{sign}{}", format_currency(transaction.details.amount))
}

/// Writes the compact list view, one entry per line.
pub fn render_list<W: Write>(output: &mut W, transactions: &[&Transaction]) -> io::Result<()> {
    if transactions.is_empty() {
        writeln!(output, "No transactions in this window.")?;
        return Ok(());
    }

    for transaction in transactions {
        let details = &transaction.details;

        writeln!(
            output,
            "[{}] {} {} | {} ({}) | {}",
            transaction.id,
            signed_amount(transaction),
            details.customer_name,
            details.description,
            details.date,
            details.category
        )?;
    }

    Ok(())
}

/// Writes the full history table.
pub fn render_table<W: Write>(output: &mut W, transactions: &[&Transaction]) -> io::Result<()> {
    writeln!(
        output,
        "{:<15} {:<10} {:<20} {:<28} {:<8} {:>14} {:<12} {:<14}",
        "ID", "DATE", "CUSTOMER", "DESCRIPTION", "TYPE", "AMOUNT", "PAYMENT", "CATEGORY"
    )?;

    for transaction in transactions {
        let details = &transaction.details;

        writeln!(
            output,
            "{:<15} {:<10} {:<20} {:<28} {:<8} {:>14} {:<12} {:<14}",
            transaction.id,
            details.date.to_string(),
            details.customer_name,
            details.description,
            details.transaction_type.to_string(),
            signed_amount(transaction),
            details.payment_method,
            details.category
        )?;
    }

    if transactions.is_empty() {
        writeln!(output, "No matching transactions.")?;
    }

    Ok(())
}

pub fn render_totals<W: Write>(output: &mut W, totals: &Totals) -> io::Result<()> {
    writeln!(output, "Income:  {}", format_currency(totals.income))?;
    writeln!(output, "Expense: {}", format_currency(totals.expense))?;

    if totals.is_negative_balance() {
        writeln!(output, "Balance: {} (in deficit)", format_currency(totals.balance))?;
    } else {
        writeln!(output, "Balance: {}", format_currency(totals.balance))?;
    }

    Ok(())
}
