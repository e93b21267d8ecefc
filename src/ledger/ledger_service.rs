use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::{debug, error, info};

use super::ledger_model::{EventContext, LedgerEntry, LedgerStatus, NewLedgerEntry, ProcessOutcome};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::errors::Result;

/// Service wrapping event handlers with the idempotency ledger.
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        LedgerService { repository }
    }

    /// Runs `handler` for an inbound event at most once per
    /// `(provider, external_event_id)`.
    ///
    /// A redelivery of a pending or already-processed event short-circuits
    /// into `ProcessOutcome::Duplicate` without touching the handler. A
    /// redelivery of a failed event re-enters processing on the same ledger
    /// row, preserving its identity and retry counter.
    ///
    /// Handler failures are recorded on the row and re-raised unchanged;
    /// this wrapper never swallows them.
    pub async fn process_with_idempotency<F, Fut, T>(
        &self,
        provider: &str,
        external_event_id: &str,
        event_type: &str,
        payload: serde_json::Value,
        handler: F,
    ) -> Result<ProcessOutcome<T>>
    where
        F: FnOnce(EventContext) -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
        T: Send + 'static,
    {
        let new_entry = NewLedgerEntry::new(provider, external_event_id, event_type, &payload)?;
        let outcome = self.repository.check_and_record(new_entry).await?;
        let entry = outcome.entry;

        if outcome.is_duplicate && entry.status() != LedgerStatus::Failed {
            debug!(
                "Skipping duplicate event '{}' from '{}' (status {})",
                external_event_id,
                provider,
                entry.status().as_str()
            );
            return Ok(ProcessOutcome::Duplicate {
                status: entry.status(),
                ledger_id: entry.id,
            });
        }

        if outcome.is_duplicate {
            info!(
                "Re-entering failed event '{}' from '{}' (retry count {})",
                external_event_id, provider, entry.retry_count
            );
        }

        let started_at = Instant::now();
        let context = EventContext {
            ledger_id: entry.id.clone(),
            provider: provider.to_string(),
            external_event_id: external_event_id.to_string(),
            event_type: event_type.to_string(),
            started_at,
        };

        match handler(context).await {
            Ok(value) => {
                let elapsed_ms = started_at.elapsed().as_millis() as i64;
                self.repository
                    .mark_processed(&entry.id, LedgerStatus::Processed, elapsed_ms, None)
                    .await?;
                Ok(ProcessOutcome::Processed(value))
            }
            Err(err) => {
                let elapsed_ms = started_at.elapsed().as_millis() as i64;
                if let Err(mark_err) = self
                    .repository
                    .mark_processed(
                        &entry.id,
                        LedgerStatus::Failed,
                        elapsed_ms,
                        Some(err.to_string()),
                    )
                    .await
                {
                    // The handler error is what the caller must see; the
                    // bookkeeping failure only gets logged.
                    error!(
                        "Failed to record failure of event '{}' from '{}': {}",
                        external_event_id, provider, mark_err
                    );
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn increment_retry(&self, ledger_id: &str) -> Result<i32> {
        self.repository.increment_retry(ledger_id).await
    }

    fn get_entry(&self, ledger_id: &str) -> Result<Option<LedgerEntry>> {
        self.repository.get_by_id(ledger_id)
    }

    fn find_entry(
        &self,
        provider: &str,
        external_event_id: &str,
    ) -> Result<Option<LedgerEntry>> {
        self.repository.find_by_provider_event(provider, external_event_id)
    }

    fn list_failed(&self) -> Result<Vec<LedgerEntry>> {
        self.repository.list_failed()
    }
}
