use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::totals;
use crate::budget::{budget_utilization, BudgetStatus, BudgetUtilization};
use crate::config::Config;
use crate::errors::{LedgerError, Result};
use crate::ledger::{Transaction, TransactionCollection, TransactionKind};

/// One category's slice of a kind's total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: u64,
    pub percentage: f64,
}

/// Per-category totals for `kind`, largest first; ties keep first appearance.
pub fn category_breakdown(
    collection: &TransactionCollection,
    kind: TransactionKind,
) -> Result<Vec<CategoryShare>> {
    let mut order: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut grand_total = 0u64;
    for txn in collection.iter().filter(|txn| txn.kind() == kind) {
        grand_total = grand_total
            .checked_add(txn.amount())
            .ok_or(LedgerError::AmountOverflow("category breakdown"))?;
        match index.get(txn.category()) {
            Some(&slot) => order[slot].1 += txn.amount(),
            None => {
                index.insert(txn.category(), order.len());
                order.push((txn.category(), txn.amount()));
            }
        }
    }
    // Stable sort keeps first-appearance order among equal totals.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(order
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category: category.to_string(),
            total,
            percentage: if grand_total == 0 {
                0.0
            } else {
                total as f64 * 100.0 / grand_total as f64
            },
        })
        .collect())
}

/// Income and expense for one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub income: u64,
    pub expense: u64,
}

impl MonthlyTotals {
    pub fn net(&self) -> i64 {
        let net = i128::from(self.income) - i128::from(self.expense);
        net.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }
}

/// Income/expense per calendar month, oldest first.
pub fn monthly_totals(collection: &TransactionCollection) -> Result<Vec<MonthlyTotals>> {
    let mut months: BTreeMap<(i32, u32), MonthlyTotals> = BTreeMap::new();
    for txn in collection {
        let date = txn.date();
        let entry = months
            .entry((date.year(), date.month()))
            .or_insert(MonthlyTotals {
                year: date.year(),
                month: date.month(),
                income: 0,
                expense: 0,
            });
        let bucket = match txn.kind() {
            TransactionKind::Income => &mut entry.income,
            TransactionKind::Expense => &mut entry.expense,
        };
        *bucket = bucket
            .checked_add(txn.amount())
            .ok_or(LedgerError::AmountOverflow("monthly totals"))?;
    }
    Ok(months.into_values().collect())
}

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(LedgerError::InvalidInput(
                "window end must be after start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// Report range selector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl ReportPeriod {
    /// The calendar week (Monday first), month, or year that holds `reference`.
    pub fn window_containing(self, reference: NaiveDate) -> Result<DateWindow> {
        let (start, end) = match self {
            ReportPeriod::Week => {
                let offset = i64::from(reference.weekday().num_days_from_monday());
                let start = reference
                    .checked_sub_signed(Duration::days(offset))
                    .ok_or_else(|| week_out_of_range(reference))?;
                let end = start
                    .checked_add_signed(Duration::days(7))
                    .ok_or_else(|| week_out_of_range(reference))?;
                (start, end)
            }
            ReportPeriod::Month => {
                let start = first_of_month(reference.year(), reference.month())?;
                let end = if reference.month() == 12 {
                    first_of_month(reference.year() + 1, 1)?
                } else {
                    first_of_month(reference.year(), reference.month() + 1)?
                };
                (start, end)
            }
            ReportPeriod::Year => (
                first_of_month(reference.year(), 1)?,
                first_of_month(reference.year() + 1, 1)?,
            ),
        };
        DateWindow::new(start, end)
    }
}

fn week_out_of_range(reference: NaiveDate) -> LedgerError {
    LedgerError::InvalidInput(format!("week containing {reference} is out of range"))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LedgerError::InvalidInput(format!("date {year}-{month:02} is out of range")))
}

/// Transactions dated inside `window`, in collection order.
pub fn in_window(collection: &TransactionCollection, window: DateWindow) -> Vec<&Transaction> {
    collection
        .iter()
        .filter(|txn| window.contains(txn.date()))
        .collect()
}

/// Figures shown on the home screen.
///
/// Income, expense and the budget cover the calendar month holding the
/// reference date; `balance` covers the whole collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub month: DateWindow,
    pub income: u64,
    pub expense: u64,
    pub balance: i64,
    pub budget_limit: u64,
    pub budget: BudgetUtilization,
    pub budget_status: BudgetStatus,
    pub recent: Vec<Transaction>,
}

impl DashboardSnapshot {
    /// Summarizes the month containing `reference` against the configured
    /// budget, keeping the first `recent` transactions in display order.
    pub fn build(
        collection: &TransactionCollection,
        config: &Config,
        reference: NaiveDate,
        recent: usize,
    ) -> Result<Self> {
        let month = ReportPeriod::Month.window_containing(reference)?;
        let this_month = in_window(collection, month);
        let income = sum_of_kind(&this_month, TransactionKind::Income)?;
        let expense = sum_of_kind(&this_month, TransactionKind::Expense)?;
        let balance = totals(collection)?.net;
        let budget = budget_utilization(expense, config.budget_limit)?;
        Ok(Self {
            month,
            income,
            expense,
            balance,
            budget_limit: config.budget_limit,
            budget,
            budget_status: budget.status_with(&config.thresholds),
            recent: collection.iter().take(recent).cloned().collect(),
        })
    }
}

fn sum_of_kind(transactions: &[&Transaction], kind: TransactionKind) -> Result<u64> {
    transactions
        .iter()
        .filter(|txn| txn.kind() == kind)
        .try_fold(0u64, |sum, txn| sum.checked_add(txn.amount()))
        .ok_or(LedgerError::AmountOverflow("monthly dashboard totals"))
}

/// Dashboard salutation for a local hour of day (0-23).
pub fn greeting_for(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Selamat Pagi",
        12..=14 => "Selamat Siang",
        15..=17 => "Selamat Sore",
        _ => "Selamat Malam",
    }
}
