#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use dompet_core::{
    config::ConfigManager,
    ledger::{Transaction, TransactionCollection, TransactionKind},
    sample::sample_transactions,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// The demo transaction set, parsed once per test binary.
pub static SAMPLE: Lazy<TransactionCollection> =
    Lazy::new(|| sample_transactions().expect("sample data parses"));

/// Creates a config manager backed by a unique directory.
pub fn setup_config_env() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn txn(id: &str, title: &str, category: &str, amount: u64, kind: TransactionKind) -> Transaction {
    Transaction::new(id, title, amount, category, date(2024, 1, 10), kind).expect("valid transaction")
}

pub fn collection(transactions: Vec<Transaction>) -> TransactionCollection {
    TransactionCollection::from_transactions(transactions).expect("unique ids")
}
