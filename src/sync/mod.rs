//! Cascade sync engine: derives accommodation stays, transport legs and
//! schedule entries from guest records without duplicating them on re-run.

pub mod derive;
mod sync_errors;
mod sync_model;
mod sync_service;
mod sync_traits;

pub use sync_errors::SyncError;
pub use sync_model::{CreatedCounts, SyncEntity, SyncResult};
pub use sync_service::CascadeSyncService;
pub use sync_traits::CascadeSyncServiceTrait;

#[cfg(test)]
mod tests;
