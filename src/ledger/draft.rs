use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionId, TransactionKind};
use crate::currency::group_digits;
use crate::errors::{LedgerError, Result};

/// Unvalidated input from the transaction entry form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDraft {
    pub title: String,
    /// Amount as typed, possibly already grouped (`"8.500.000"`).
    pub amount_text: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Stores the typed amount re-grouped for display, as the form does on every keystroke.
    pub fn set_amount_text(&mut self, text: &str) {
        self.amount_text = format_amount_input(text);
    }

    /// Turns the draft into a transaction dated `date` with a generated id.
    pub fn validate(&self, date: NaiveDate) -> Result<Transaction> {
        let kind = self
            .kind
            .ok_or_else(|| LedgerError::InvalidInput("transaction type is required".into()))?;
        if self.title.trim().is_empty()
            || self.category.trim().is_empty()
            || self.amount_text.trim().is_empty()
        {
            return Err(LedgerError::InvalidInput(
                "title, amount and category are required".into(),
            ));
        }
        let amount = parse_amount_input(&self.amount_text)?;
        Transaction::new(
            TransactionId::generate(),
            self.title.trim(),
            amount,
            self.category.trim(),
            date,
            kind,
        )
    }
}

/// Extracts a positive whole-Rupiah amount from typed text.
///
/// Every character that is not an ASCII digit is dropped, so grouping dots and
/// a leading `Rp` are accepted.
pub fn parse_amount_input(text: &str) -> Result<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(LedgerError::InvalidInput(format!(
            "amount `{text}` contains no digits"
        )));
    }
    let amount: u64 = digits
        .parse()
        .map_err(|_| LedgerError::InvalidInput(format!("amount `{text}` is too large")))?;
    if amount == 0 {
        return Err(LedgerError::InvalidInput(
            "amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

/// Re-groups the digits of typed text with `.` separators; empty when no digits remain.
pub fn format_amount_input(text: &str) -> String {
    let digits: String = text
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|ch| *ch == '0')
        .collect();
    if digits.is_empty() {
        return if text.chars().any(|ch| ch == '0') {
            "0".into()
        } else {
            String::new()
        };
    }
    group_digits(&digits, '.')
}
