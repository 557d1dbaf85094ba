use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Division by zero: budget limit must be greater than zero")]
    DivisionByZero,
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
