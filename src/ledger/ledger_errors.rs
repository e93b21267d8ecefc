use thiserror::Error;

/// Errors raised by the idempotency ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger entry not found: {0}")]
    NotFound(String),
}
