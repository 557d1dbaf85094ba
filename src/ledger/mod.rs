//! Ledger domain models: transactions, collections, categories and entry drafts.

pub mod category;
pub mod collection;
pub mod draft;
pub mod transaction;

pub use category::{is_suggested, suggested_categories, OTHER_CATEGORY};
pub use collection::TransactionCollection;
pub use draft::{format_amount_input, parse_amount_input, TransactionDraft};
pub use transaction::{RawId, RawTransaction, Transaction, TransactionId, TransactionKind};
