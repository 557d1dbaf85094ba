//! Demo data set used by the screens before a real source is wired in.

use crate::errors::Result;
use crate::ledger::TransactionCollection;

/// Source records in their original shape: expense amounts carry a minus sign.
pub const SAMPLE_TRANSACTIONS_JSON: &str = r#"[
  {"id": "1", "title": "Gojek - Transportasi", "amount": -25000, "category": "Transport", "date": "2024-01-15", "type": "expense"},
  {"id": "2", "title": "Gaji Bulanan", "amount": 8500000, "category": "Salary", "date": "2024-01-01", "type": "income"},
  {"id": "3", "title": "Indomaret - Belanja", "amount": -150000, "category": "Shopping", "date": "2024-01-14", "type": "expense"},
  {"id": "4", "title": "Dana - Top Up", "amount": -500000, "category": "Transfer", "date": "2024-01-13", "type": "expense"},
  {"id": "5", "title": "Freelance Project", "amount": 2500000, "category": "Freelance", "date": "2024-01-12", "type": "income"},
  {"id": "6", "title": "Warteg Bahari", "amount": -35000, "category": "Food", "date": "2024-01-12", "type": "expense"},
  {"id": "7", "title": "Listrik PLN", "amount": -450000, "category": "Bills", "date": "2024-01-10", "type": "expense"},
  {"id": "8", "title": "Bonus Kinerja", "amount": 1000000, "category": "Bonus", "date": "2024-01-08", "type": "income"}
]"#;

/// Parses [`SAMPLE_TRANSACTIONS_JSON`] into a collection.
pub fn sample_transactions() -> Result<TransactionCollection> {
    TransactionCollection::from_json(SAMPLE_TRANSACTIONS_JSON)
}
