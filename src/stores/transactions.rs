//! In-memory transaction history.
//!
//! Keeps every recorded transaction in insertion order and computes the
//! aggregate income/expense figures over them. Records are only ever
//! appended; there is no edit or delete.

use rust_decimal::Decimal;

use crate::{Error, Transaction, TransactionKind};

/// Aggregate figures over all recorded transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Default)]
pub struct TransactionsStore {
    transactions: Vec<Transaction>,
}

impl TransactionsStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// All transactions in the order they were recorded.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns an error if a total does not fit in a [`Decimal`].
    pub fn summary(&self) -> Result<Summary, Error> {
        let mut summary = Summary::default();
        for transaction in &self.transactions {
            let total = match transaction.kind() {
                TransactionKind::Income => &mut summary.income,
                TransactionKind::Expense => &mut summary.expense,
            };
            *total = total
                .checked_add(transaction.amount())
                .ok_or(Error::SummaryOverflow)?;
        }
        summary.balance = summary
            .income
            .checked_sub(summary.expense)
            .ok_or(Error::SummaryOverflow)?;
        Ok(summary)
    }
}
