mod common;

use common::SAMPLE;
use dompet_core::{
    currency::{
        format_currency, format_currency_rounded, format_currency_value, format_number,
        format_short_date, format_signed_amount, CurrencyCode, LocaleConfig,
    },
    ledger::TransactionId,
};

#[test]
fn formats_dashboard_amounts() {
    assert_eq!(format_currency(12_750_000), "Rp12.750.000");
    assert_eq!(format_currency(5_000_000), "Rp5.000.000");
    assert_eq!(format_currency(0), "Rp0");
}

#[test]
fn formatting_is_total_over_awkward_inputs() {
    for value in [i64::MIN, -1, 0, 1, 999, 1_000, i64::MAX] {
        let formatted = format_currency(value);
        assert!(formatted.contains("Rp"), "{formatted}");
    }
    for value in [f64::NAN, f64::NEG_INFINITY, -0.5, 0.5, 1e30] {
        let formatted = format_currency_rounded(value);
        assert!(formatted.contains("Rp"), "{formatted}");
    }
}

#[test]
fn signed_display_amounts_from_sample() {
    let salary = SAMPLE.get(&TransactionId::from("2")).expect("salary");
    let gojek = SAMPLE.get(&TransactionId::from("1")).expect("gojek");
    assert_eq!(format_signed_amount(salary), "+Rp8.500.000");
    assert_eq!(format_signed_amount(gojek), "-Rp25.000");
    assert_eq!(format_short_date(gojek.date()), "15 Jan");
}

#[test]
fn formats_with_custom_locale() {
    let mut locale = LocaleConfig::default();
    locale.grouping_separator = ' ';
    assert_eq!(format_number(&locale, -1_234_567), "-1 234 567");
    let formatted = format_currency_value(1_234_567, &CurrencyCode::new("idr"), &locale);
    assert_eq!(formatted, "Rp1 234 567");
}
