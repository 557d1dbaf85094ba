use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dompet_core::{
    ledger::{Transaction, TransactionCollection, TransactionKind},
    query::{aggregate, category_breakdown, search, TypeFilter},
};

const CATEGORIES: &[&str] = &["Food", "Transport", "Shopping", "Bills", "Salary", "Transfer"];

fn build_sample_collection(txn_count: usize) -> TransactionCollection {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let transactions = (0..txn_count)
        .map(|idx| {
            let kind = if idx % 5 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            Transaction::new(
                idx.to_string(),
                format!("Transaksi nomor {idx}"),
                10_000 + (idx % 1_000) as u64 * 500,
                CATEGORIES[idx % CATEGORIES.len()],
                start_date + Duration::days((idx % 365) as i64),
                kind,
            )
            .expect("valid transaction")
        })
        .collect();
    TransactionCollection::from_transactions(transactions).expect("unique ids")
}

fn bench_queries(c: &mut Criterion) {
    let collection = build_sample_collection(black_box(10_000));

    c.bench_function("search_10k", |b| {
        b.iter(|| {
            let found = search(&collection, black_box("nomor 99"), TypeFilter::Expense);
            black_box(found);
        })
    });

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let total = aggregate(&collection, black_box(TransactionKind::Expense))
                .expect("no overflow");
            black_box(total);
        })
    });

    c.bench_function("category_breakdown_10k", |b| {
        b.iter(|| {
            let shares = category_breakdown(&collection, TransactionKind::Expense)
                .expect("no overflow");
            black_box(shares);
        })
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
