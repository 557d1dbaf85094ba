//! Read-only queries over a [`TransactionCollection`].
//!
//! Every function here borrows the collection, performs no I/O, and returns
//! the same answer for the same inputs.

pub mod report;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::budget::{budget_utilization, BudgetUtilization};
use crate::errors::{LedgerError, Result};
use crate::ledger::{Transaction, TransactionCollection, TransactionKind};

pub use report::{
    category_breakdown, greeting_for, in_window, monthly_totals, CategoryShare, DashboardSnapshot,
    DateWindow, MonthlyTotals, ReportPeriod,
};

/// Transaction type selector for list filtering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for TypeFilter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => TypeFilter::Income,
            TransactionKind::Expense => TypeFilter::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown type filter `{other}`"
            ))),
        }
    }
}

/// Income, expense and their difference for one collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    pub income: u64,
    pub expense: u64,
    pub net: i64,
}

/// Transactions whose title or category contains `query_text` (ignoring case)
/// and whose kind passes `type_filter`, in collection order.
pub fn search<'a>(
    collection: &'a TransactionCollection,
    query_text: &str,
    type_filter: TypeFilter,
) -> Vec<&'a Transaction> {
    let needle = query_text.to_lowercase();
    collection
        .iter()
        .filter(|txn| type_filter.matches(txn.kind()))
        .filter(|txn| needle.is_empty() || matches_text(txn, &needle))
        .collect()
}

fn matches_text(txn: &Transaction, needle: &str) -> bool {
    txn.title().to_lowercase().contains(needle) || txn.category().to_lowercase().contains(needle)
}

/// Sum of magnitudes for every transaction of `kind`.
pub fn aggregate(collection: &TransactionCollection, kind: TransactionKind) -> Result<u64> {
    collection
        .iter()
        .filter(|txn| txn.kind() == kind)
        .try_fold(0u64, |sum, txn| sum.checked_add(txn.amount()))
        .ok_or(LedgerError::AmountOverflow("aggregate"))
}

/// Income total minus expense total.
pub fn net_income(collection: &TransactionCollection) -> Result<i64> {
    totals(collection).map(|totals| totals.net)
}

pub fn totals(collection: &TransactionCollection) -> Result<Totals> {
    let income = aggregate(collection, TransactionKind::Income)?;
    let expense = aggregate(collection, TransactionKind::Expense)?;
    let net = i128::from(income) - i128::from(expense);
    let net = i64::try_from(net).map_err(|_| LedgerError::AmountOverflow("net income"))?;
    Ok(Totals {
        income,
        expense,
        net,
    })
}

/// Borrowing façade over the free query functions.
#[derive(Debug, Clone, Copy)]
pub struct TransactionQueryEngine<'a> {
    collection: &'a TransactionCollection,
}

impl<'a> TransactionQueryEngine<'a> {
    pub fn new(collection: &'a TransactionCollection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &'a TransactionCollection {
        self.collection
    }

    pub fn search(&self, query_text: &str, type_filter: TypeFilter) -> Vec<&'a Transaction> {
        search(self.collection, query_text, type_filter)
    }

    pub fn aggregate(&self, kind: TransactionKind) -> Result<u64> {
        aggregate(self.collection, kind)
    }

    pub fn net_income(&self) -> Result<i64> {
        net_income(self.collection)
    }

    pub fn totals(&self) -> Result<Totals> {
        totals(self.collection)
    }

    /// Expense total measured against `budget_limit`.
    pub fn budget_utilization(&self, budget_limit: u64) -> Result<BudgetUtilization> {
        budget_utilization(self.aggregate(TransactionKind::Expense)?, budget_limit)
    }

    pub fn category_breakdown(&self, kind: TransactionKind) -> Result<Vec<CategoryShare>> {
        category_breakdown(self.collection, kind)
    }

    pub fn monthly_totals(&self) -> Result<Vec<MonthlyTotals>> {
        monthly_totals(self.collection)
    }

    pub fn in_window(&self, window: DateWindow) -> Vec<&'a Transaction> {
        in_window(self.collection, window)
    }
}
