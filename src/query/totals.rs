use crate::models::{Transaction, TransactionType};
use crate::types::Amount;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount
}

impl Totals {
    pub fn is_negative_balance(&self) -> bool {
        self.balance.is_negative()
    }
}

/// Sums income and expense amounts over a set of transactions.
pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        match transaction.details.transaction_type {
            TransactionType::Income => totals.income += transaction.details.amount,
            TransactionType::Expense => totals.expense += transaction.details.amount
        }
    }

    totals.balance = totals.income;
    totals.balance -= totals.expense;

    totals
}
