//! Budget utilization and its warning thresholds.

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Percent-used cut-offs for the budget bar colour states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetThresholds {
    pub caution_percent: f64,
    pub critical_percent: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            caution_percent: 60.0,
            critical_percent: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetStatus {
    Healthy,
    Caution,
    Critical,
}

/// Share of a budget limit already spent.
///
/// The stored percentage is raw and may exceed 100; clamping is only applied
/// through [`BudgetUtilization::clamped`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetUtilization {
    percent: f64,
}

impl BudgetUtilization {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Percentage limited to `[0, 100]` for bar widths.
    pub fn clamped(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }

    pub fn status(&self) -> BudgetStatus {
        self.status_with(&BudgetThresholds::default())
    }

    pub fn status_with(&self, thresholds: &BudgetThresholds) -> BudgetStatus {
        if self.percent > thresholds.critical_percent {
            BudgetStatus::Critical
        } else if self.percent > thresholds.caution_percent {
            BudgetStatus::Caution
        } else {
            BudgetStatus::Healthy
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.percent > 100.0
    }

    pub fn summary_label(&self) -> String {
        format!("{:.1}% dari anggaran terpakai", self.percent)
    }
}

/// Computes `total_expense / budget_limit * 100`.
///
/// A zero limit is rejected with [`LedgerError::DivisionByZero`].
pub fn budget_utilization(total_expense: u64, budget_limit: u64) -> Result<BudgetUtilization> {
    if budget_limit == 0 {
        return Err(LedgerError::DivisionByZero);
    }
    let percent = total_expense as f64 * 100.0 / budget_limit as f64;
    Ok(BudgetUtilization { percent })
}
