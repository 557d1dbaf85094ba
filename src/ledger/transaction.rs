use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

/// Identifier of a transaction, unique within a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocates a fresh random identifier for transactions created locally.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Sign applied when a signed value is needed for display.
    pub fn sign(self) -> i64 {
        match self {
            TransactionKind::Income => 1,
            TransactionKind::Expense => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Pemasukan",
            TransactionKind::Expense => "Pengeluaran",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown transaction type `{other}`"
            ))),
        }
    }
}

/// An income or expense record.
///
/// The amount is always a magnitude in whole Rupiah; the direction lives in
/// [`TransactionKind`] alone. Use [`Transaction::signed_amount`] when a signed
/// value is needed for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    id: TransactionId,
    title: String,
    amount: u64,
    category: String,
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: TransactionKind,
}

impl Transaction {
    /// Builds a transaction, rejecting a blank title or category.
    pub fn new(
        id: impl Into<TransactionId>,
        title: impl Into<String>,
        amount: u64,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Result<Self> {
        let title = title.into();
        let category = category.into();
        if title.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "transaction title must not be empty".into(),
            ));
        }
        if category.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "transaction category must not be empty".into(),
            ));
        }
        Ok(Self {
            id: id.into(),
            title,
            amount,
            category,
            date,
            kind,
        })
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unsigned magnitude in whole Rupiah.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Amount with the sign implied by the kind. Saturates at `i64::MAX`.
    pub fn signed_amount(&self) -> i64 {
        let magnitude = i64::try_from(self.amount).unwrap_or(i64::MAX);
        magnitude * self.kind.sign()
    }
}

/// Identifier as it appears in source data: either text or a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(u64),
}

/// Transaction record in the shape used by the mock data sets, where the
/// amount may carry a sign that duplicates `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub id: RawId,
    pub title: String,
    pub amount: serde_json::Value,
    pub category: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = LedgerError;

    fn try_from(raw: RawTransaction) -> Result<Self> {
        let id = match raw.id {
            RawId::Text(text) => TransactionId::new(text),
            RawId::Number(number) => TransactionId::new(number.to_string()),
        };
        let amount = magnitude_from_json(&id, &raw.amount)?;
        if let Some(signed) = raw.amount.as_i64() {
            let expected_negative = raw.kind == TransactionKind::Expense;
            if signed != 0 && (signed < 0) != expected_negative {
                tracing::warn!(
                    transaction = %id,
                    amount = signed,
                    kind = ?raw.kind,
                    "amount sign disagrees with transaction type; using magnitude"
                );
            }
        }
        let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d").map_err(|err| {
            LedgerError::InvalidInput(format!(
                "transaction {id}: invalid date `{}`: {err}",
                raw.date
            ))
        })?;
        Transaction::new(id, raw.title, amount, raw.category, date, raw.kind)
    }
}

fn magnitude_from_json(id: &TransactionId, value: &serde_json::Value) -> Result<u64> {
    let number = value.as_number().ok_or_else(|| {
        LedgerError::InvalidInput(format!("transaction {id}: amount `{value}` is not numeric"))
    })?;
    if let Some(signed) = number.as_i64() {
        return Ok(signed.unsigned_abs());
    }
    number.as_u64().ok_or_else(|| {
        LedgerError::InvalidInput(format!(
            "transaction {id}: amount `{number}` is not a whole Rupiah value"
        ))
    })
}
