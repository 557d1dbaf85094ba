#![doc(test(attr(deny(warnings))))]

//! Dompet Core answers the search, aggregation and formatting questions behind
//! a personal-finance app: filtering transactions, summing income and
//! expenses, budget utilization, and Rupiah display strings.

pub mod budget;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod sample;
pub mod utils;

pub use errors::{LedgerError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dompet Core tracing initialized.");
    });
}
