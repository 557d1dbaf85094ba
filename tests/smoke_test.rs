mod common;

use common::date;
use dompet_core::{
    config::Config,
    init,
    ledger::{suggested_categories, TransactionDraft, TransactionKind},
    query::{DashboardSnapshot, TransactionQueryEngine, TypeFilter},
    sample::sample_transactions,
};

#[test]
fn add_transaction_then_query() {
    init();

    let sample = sample_transactions().unwrap();
    let mut draft = TransactionDraft::new(TransactionKind::Expense);
    draft.title = "Bioskop XXI".into();
    draft.category = suggested_categories(TransactionKind::Expense)[4].into();
    draft.set_amount_text("75000");
    let ticket = draft.validate(date(2024, 1, 16)).unwrap();

    let updated = sample.with_transaction(ticket).unwrap();
    assert_eq!(sample.len(), 8);
    assert_eq!(updated.len(), 9);

    let engine = TransactionQueryEngine::new(&updated);
    let found = engine.search("entertain", TypeFilter::Expense);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title(), "Bioskop XXI");

    let snapshot =
        DashboardSnapshot::build(&updated, &Config::default(), date(2024, 1, 31), 4).unwrap();
    assert_eq!(snapshot.expense, 1_235_000);
}
