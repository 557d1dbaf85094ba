use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::transaction::{RawTransaction, Transaction, TransactionId};
use crate::errors::{LedgerError, Result};

/// Ordered set of transactions in display order.
///
/// Ids are unique; nothing else is enforced. Queries borrow the collection and
/// never modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Transaction>", into = "Vec<Transaction>")]
pub struct TransactionCollection {
    transactions: Vec<Transaction>,
}

impl TransactionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, keeping the given order and rejecting duplicate ids.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(transactions.len());
        for txn in &transactions {
            if !seen.insert(txn.id()) {
                return Err(duplicate_id(txn.id()));
            }
        }
        Ok(Self { transactions })
    }

    /// Parses an array of source records (signed amounts, text or numeric ids).
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawTransaction> = serde_json::from_str(json)?;
        let transactions = raw
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>>>()?;
        let collection = Self::from_transactions(transactions)?;
        tracing::debug!(count = collection.len(), "loaded transaction collection");
        Ok(collection)
    }

    /// Appends a transaction in place.
    pub fn push(&mut self, transaction: Transaction) -> Result<()> {
        if self.get(transaction.id()).is_some() {
            return Err(duplicate_id(transaction.id()));
        }
        self.transactions.push(transaction);
        Ok(())
    }

    /// Returns a new collection with `transaction` appended, leaving `self` untouched.
    pub fn with_transaction(&self, transaction: Transaction) -> Result<Self> {
        let mut next = self.clone();
        next.push(transaction)?;
        Ok(next)
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TryFrom<Vec<Transaction>> for TransactionCollection {
    type Error = LedgerError;

    fn try_from(transactions: Vec<Transaction>) -> Result<Self> {
        Self::from_transactions(transactions)
    }
}

impl From<TransactionCollection> for Vec<Transaction> {
    fn from(collection: TransactionCollection) -> Self {
        collection.transactions
    }
}

impl<'a> IntoIterator for &'a TransactionCollection {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

fn duplicate_id(id: &TransactionId) -> LedgerError {
    LedgerError::InvalidInput(format!("duplicate transaction id `{id}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use chrono::NaiveDate;

    fn txn(id: &str, amount: u64, kind: TransactionKind) -> Transaction {
        Transaction::new(
            id,
            format!("Transaksi {id}"),
            amount,
            "Other",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            kind,
        )
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = TransactionCollection::from_transactions(vec![
            txn("1", 10, TransactionKind::Income),
            txn("1", 20, TransactionKind::Expense),
        ])
        .expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn with_transaction_leaves_original_untouched() {
        let base =
            TransactionCollection::from_transactions(vec![txn("1", 10, TransactionKind::Income)])
                .unwrap();
        let next = base
            .with_transaction(txn("2", 5, TransactionKind::Expense))
            .unwrap();
        assert_eq!(base.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.as_slice()[1].id().as_str(), "2");
        assert!(base
            .with_transaction(txn("1", 99, TransactionKind::Expense))
            .is_err());
    }

    #[test]
    fn from_json_preserves_order() {
        let json = r#"[
            {"id": "2", "title": "Gaji Bulanan", "amount": 8500000, "category": "Salary", "date": "2024-01-01", "type": "income"},
            {"id": "1", "title": "Gojek - Transportasi", "amount": -25000, "category": "Transport", "date": "2024-01-15", "type": "expense"}
        ]"#;
        let collection = TransactionCollection::from_json(json).unwrap();
        let ids: Vec<_> = collection.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(collection.as_slice()[1].amount(), 25_000);
    }

    #[test]
    fn from_json_rejects_malformed_amount() {
        let json = r#"[{"id": "1", "title": "Kopi", "amount": "abc", "category": "Food", "date": "2024-01-15", "type": "expense"}]"#;
        let err = TransactionCollection::from_json(json).expect_err("non-numeric amount");
        assert!(matches!(err, LedgerError::InvalidInput(_)));
    }

    #[test]
    fn from_json_surfaces_syntax_errors() {
        let err = TransactionCollection::from_json("[{").expect_err("broken json");
        assert!(matches!(err, LedgerError::Serde(_)));
    }
}
