//! Rupiah-first currency and date formatting.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::Transaction;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("IDR")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "id-ID".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "IDR" => "Rp".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "JPY" => "¥".into(),
        "SGD" => "S$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "IDR" | "JPY" => 0,
        _ => 2,
    }
}

/// Groups the integer part of `value` with the locale's separator.
pub fn format_number(locale: &LocaleConfig, value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits, locale.grouping_separator);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Inserts `separator` between every group of three digits, counting from the right.
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a whole amount in `code`, placing the sign before the symbol.
pub fn format_currency_value(amount: i64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{}", format_magnitude(amount.unsigned_abs(), code, locale))
}

fn format_magnitude(magnitude: u64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let mut body = group_digits(&magnitude.to_string(), locale.grouping_separator);
    let precision = minor_units_for(code.as_str());
    if precision > 0 {
        body.push(locale.decimal_separator);
        body.extend(std::iter::repeat('0').take(precision as usize));
    }
    format!("{}{body}", symbol_for(code.as_str()))
}

/// Formats whole Rupiah: `8500000` becomes `Rp8.500.000`.
pub fn format_currency(amount: i64) -> String {
    format_currency_value(amount, &CurrencyCode::default(), &LocaleConfig::default())
}

/// Rounds to the nearest whole Rupiah (half away from zero) and formats.
///
/// NaN formats as `Rp0`; infinities saturate to the `i64` range.
pub fn format_currency_rounded(amount: f64) -> String {
    format_currency(round_to_rupiah(amount))
}

pub fn round_to_rupiah(amount: f64) -> i64 {
    // `as` saturates and maps NaN to zero.
    amount.round() as i64
}

/// Display amount with an explicit direction prefix: `+Rp8.500.000` or `-Rp25.000`.
pub fn format_signed_amount(transaction: &Transaction) -> String {
    format_signed_amount_with(transaction, &CurrencyCode::default(), &LocaleConfig::default())
}

/// Signed display amount in the configured currency and locale.
pub fn format_signed_amount_with(
    transaction: &Transaction,
    code: &CurrencyCode,
    locale: &LocaleConfig,
) -> String {
    let prefix = if transaction.is_income() { '+' } else { '-' };
    format!(
        "{prefix}{}",
        format_magnitude(transaction.amount(), code, locale)
    )
}

/// Short day-month label used in transaction lists, e.g. `15 Jan`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_label(date.month()))
}

/// Indonesian three-letter month abbreviation.
pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "Mei",
        6 => "Jun",
        7 => "Jul",
        8 => "Agu",
        9 => "Sep",
        10 => "Okt",
        11 => "Nov",
        12 => "Des",
        _ => "",
    }
}
