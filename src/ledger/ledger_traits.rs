use async_trait::async_trait;

use super::ledger_model::{CheckOutcome, LedgerEntry, LedgerStatus, NewLedgerEntry};
use crate::errors::Result;

/// Trait for idempotency-ledger repository operations
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Atomically insert the entry, or fetch the existing row for its
    /// `(provider, external_event_id)` key and report the duplicate.
    async fn check_and_record(&self, new_entry: NewLedgerEntry) -> Result<CheckOutcome>;

    /// Persist the terminal state of one processing attempt.
    ///
    /// Sets `processed_at` on success and the error message on failure;
    /// never touches the retry counter.
    async fn mark_processed(
        &self,
        ledger_id: &str,
        status: LedgerStatus,
        duration_ms: i64,
        error: Option<String>,
    ) -> Result<()>;

    /// Bump the retry counter, returning the new count. Retry scheduling is
    /// the caller's policy; the ledger only keeps the tally.
    async fn increment_retry(&self, ledger_id: &str) -> Result<i32>;

    /// Get an entry by ledger ID
    fn get_by_id(&self, ledger_id: &str) -> Result<Option<LedgerEntry>>;

    /// Get an entry by its idempotency key
    fn find_by_provider_event(
        &self,
        provider: &str,
        external_event_id: &str,
    ) -> Result<Option<LedgerEntry>>;

    /// List failed entries, oldest first (retry-policy surface)
    fn list_failed(&self) -> Result<Vec<LedgerEntry>>;

    /// List all entries recorded for a provider, newest first
    fn list_by_provider(&self, provider: &str) -> Result<Vec<LedgerEntry>>;
}

/// Trait for ledger service operations
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Bump the retry counter of an entry, returning the new count
    async fn increment_retry(&self, ledger_id: &str) -> Result<i32>;

    /// Get an entry by ledger ID
    fn get_entry(&self, ledger_id: &str) -> Result<Option<LedgerEntry>>;

    /// Get an entry by its idempotency key
    fn find_entry(
        &self,
        provider: &str,
        external_event_id: &str,
    ) -> Result<Option<LedgerEntry>>;

    /// List failed entries, oldest first
    fn list_failed(&self) -> Result<Vec<LedgerEntry>>;
}
