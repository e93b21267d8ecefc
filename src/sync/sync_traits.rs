use async_trait::async_trait;

use super::sync_model::{SyncEntity, SyncResult};

/// Trait for cascade sync engine operations
#[async_trait]
pub trait CascadeSyncServiceTrait: Send + Sync {
    /// Run the derivation rules `entity` maps to for each subject, one
    /// transaction per subject. Subject failures are recorded in the result
    /// and never abort the rest of the batch.
    async fn trigger_batch_sync(&self, entity: SyncEntity, subject_ids: &[String]) -> SyncResult;

    /// Run the full fixed rule chain for one subject inside a single
    /// transaction; any step failure rolls back the whole subject.
    async fn trigger_full_sync(&self, subject_id: &str) -> SyncResult;
}
