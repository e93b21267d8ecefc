//! Service running the cascade derivation rules for one or many subjects.

use async_trait::async_trait;
use chrono::Utc;
use diesel::SqliteConnection;
use log::{debug, info, warn};
use std::sync::Arc;

use super::derive;
use super::sync_errors::SyncError;
use super::sync_model::{CreatedCounts, SyncEntity, SyncResult};
use super::sync_traits::CascadeSyncServiceTrait;
use crate::accommodations::{AccommodationRepositoryTrait, NewAccommodationStay};
use crate::clients::{Client, ClientRepositoryTrait};
use crate::db::DbTransactionExecutor;
use crate::errors::{Error, Result};
use crate::guests::GuestRepositoryTrait;
use crate::schedule::{ScheduleRepositoryTrait, SourceModule};
use crate::transport::{LegType, NewTransportLeg, TransportRepositoryTrait};
use crate::utils::{short_id, DATE_FORMAT, TIME_FORMAT};

/// Cascade sync engine (generic over the transaction executor).
///
/// Every subject is processed inside its own transaction; the fixed rule
/// order (stays and legs before schedule entries) lets the schedule rules
/// see rows created earlier in the same transaction.
pub struct CascadeSyncService<E: DbTransactionExecutor + Send + Sync + Clone> {
    client_repository: Arc<dyn ClientRepositoryTrait>,
    guest_repository: Arc<dyn GuestRepositoryTrait>,
    accommodation_repository: Arc<dyn AccommodationRepositoryTrait>,
    transport_repository: Arc<dyn TransportRepositoryTrait>,
    schedule_repository: Arc<dyn ScheduleRepositoryTrait>,
    transaction_executor: E,
}

impl<E: DbTransactionExecutor + Send + Sync + Clone> CascadeSyncService<E> {
    pub fn new(
        client_repository: Arc<dyn ClientRepositoryTrait>,
        guest_repository: Arc<dyn GuestRepositoryTrait>,
        accommodation_repository: Arc<dyn AccommodationRepositoryTrait>,
        transport_repository: Arc<dyn TransportRepositoryTrait>,
        schedule_repository: Arc<dyn ScheduleRepositoryTrait>,
        transaction_executor: E,
    ) -> Self {
        Self {
            client_repository,
            guest_repository,
            accommodation_repository,
            transport_repository,
            schedule_repository,
            transaction_executor,
        }
    }

    /// Runs the rules `entity` maps to for one subject, inside one
    /// transaction. Any error rolls the subject back entirely.
    fn sync_subject(&self, entity: SyncEntity, subject_id: &str) -> Result<CreatedCounts> {
        self.transaction_executor.execute(|conn| {
            let client = self
                .client_repository
                .get_in_transaction(subject_id, conn)?
                .ok_or_else(|| Error::from(SyncError::SubjectNotFound(subject_id.to_string())))?;

            let mut counts = CreatedCounts::default();
            match entity {
                SyncEntity::Guests => {
                    counts.accommodation = self.derive_stays(&client, conn)?;
                    counts.transport = self.derive_legs(&client, conn)?;
                    counts.schedule = self.derive_stay_schedule(&client, conn)?
                        + self.derive_leg_schedule(&client, conn)?;
                }
                SyncEntity::Accommodations => {
                    counts.schedule = self.derive_stay_schedule(&client, conn)?;
                }
                SyncEntity::Transport => {
                    counts.schedule = self.derive_leg_schedule(&client, conn)?;
                }
            }

            Ok::<CreatedCounts, Error>(counts)
        })
    }

    /// guest -> accommodation: one stay per guest flagged as needing one.
    fn derive_stays(&self, client: &Client, conn: &mut SqliteConnection) -> Result<usize> {
        let reference_date = client.reference_date()?;
        let guests = self
            .guest_repository
            .list_by_client_in_transaction(&client.id, conn)?;

        let mut created = 0;
        for guest in guests.iter().filter(|g| g.requires_accommodation()) {
            if self
                .accommodation_repository
                .find_by_guest_in_transaction(&guest.id, conn)?
                .is_some()
            {
                continue;
            }

            let window = derive::stay_window(guest, reference_date);
            let new_stay = NewAccommodationStay {
                id: short_id("stay"),
                client_id: client.id.clone(),
                guest_id: guest.id.clone(),
                hotel_name: None,
                check_in: Some(window.check_in.format(DATE_FORMAT).to_string()),
                check_out: Some(window.check_out.format(DATE_FORMAT).to_string()),
                room_type: guest.room_preference.clone(),
                created_at: Utc::now().to_rfc3339(),
            };

            created += self
                .accommodation_repository
                .insert_in_transaction(new_stay, conn)?;
            debug!("Derived accommodation stay for guest {}", guest.id);
        }

        Ok(created)
    }

    /// guest -> transport: one arrival leg per guest flagged as needing one.
    fn derive_legs(&self, client: &Client, conn: &mut SqliteConnection) -> Result<usize> {
        let guests = self
            .guest_repository
            .list_by_client_in_transaction(&client.id, conn)?;

        let mut created = 0;
        for guest in guests.iter().filter(|g| g.requires_transport()) {
            if self
                .transport_repository
                .find_by_guest_in_transaction(&guest.id, conn)?
                .is_some()
            {
                continue;
            }

            let pickup = derive::pickup_schedule(guest);
            let new_leg = NewTransportLeg {
                id: short_id("leg"),
                client_id: client.id.clone(),
                guest_id: guest.id.clone(),
                leg_type: LegType::Arrival.as_str().to_string(),
                pickup_date: pickup
                    .as_ref()
                    .map(|p| p.date.format(DATE_FORMAT).to_string()),
                pickup_time: pickup
                    .as_ref()
                    .and_then(|p| p.time)
                    .map(|t| t.format(TIME_FORMAT).to_string()),
                pickup_from: guest.pickup_from.clone(),
                drop_to: guest.drop_to.clone(),
                vehicle_info: derive::vehicle_descriptor(guest),
                created_at: Utc::now().to_rfc3339(),
            };

            created += self
                .transport_repository
                .insert_in_transaction(new_leg, conn)?;
            debug!("Derived transport leg for guest {}", guest.id);
        }

        Ok(created)
    }

    /// accommodation -> schedule: a check-in entry per stay with a usable date.
    fn derive_stay_schedule(&self, client: &Client, conn: &mut SqliteConnection) -> Result<usize> {
        let stays = self
            .accommodation_repository
            .list_by_client_in_transaction(&client.id, conn)?;

        let mut created = 0;
        for stay in &stays {
            let check_in = match stay.check_in_date() {
                Some(date) => date,
                None => continue,
            };

            if self
                .schedule_repository
                .find_by_source_in_transaction(SourceModule::Accommodation, &stay.id, conn)?
                .is_some()
            {
                continue;
            }

            let guest_name = self
                .guest_repository
                .get_in_transaction(&stay.guest_id, conn)?
                .map(|g| g.full_name())
                .unwrap_or_else(|| stay.guest_id.clone());

            let entry = derive::check_in_entry(stay, &guest_name, check_in)?;
            created += self
                .schedule_repository
                .insert_in_transaction(entry, conn)?;
            debug!("Derived check-in schedule entry for stay {}", stay.id);
        }

        Ok(created)
    }

    /// transport -> schedule: a pickup entry per leg with a usable date.
    fn derive_leg_schedule(&self, client: &Client, conn: &mut SqliteConnection) -> Result<usize> {
        let legs = self
            .transport_repository
            .list_by_client_in_transaction(&client.id, conn)?;

        let mut created = 0;
        for leg in &legs {
            let pickup_date = match leg.pickup_date() {
                Some(date) => date,
                None => continue,
            };

            if self
                .schedule_repository
                .find_by_source_in_transaction(SourceModule::Transport, &leg.id, conn)?
                .is_some()
            {
                continue;
            }

            let guest_name = self
                .guest_repository
                .get_in_transaction(&leg.guest_id, conn)?
                .map(|g| g.full_name())
                .unwrap_or_else(|| leg.guest_id.clone());

            let entry = derive::pickup_entry(leg, &guest_name, pickup_date)?;
            created += self
                .schedule_repository
                .insert_in_transaction(entry, conn)?;
            debug!("Derived pickup schedule entry for leg {}", leg.id);
        }

        Ok(created)
    }
}

#[async_trait]
impl<E: DbTransactionExecutor + Send + Sync + Clone> CascadeSyncServiceTrait
    for CascadeSyncService<E>
{
    async fn trigger_batch_sync(&self, entity: SyncEntity, subject_ids: &[String]) -> SyncResult {
        info!(
            "Starting '{}' batch sync for {} subjects",
            entity.as_str(),
            subject_ids.len()
        );

        let mut result = SyncResult::new();
        for subject_id in subject_ids {
            match self.sync_subject(entity, subject_id) {
                Ok(counts) => {
                    debug!(
                        "Subject {} synced ({} rows created)",
                        subject_id,
                        counts.total()
                    );
                    result.record_subject(counts);
                }
                Err(err) => {
                    warn!("Sync failed for subject {}: {}", subject_id, err);
                    result.record_failure(subject_id, &err);
                }
            }
        }

        info!(
            "Batch sync finished: {} synced, {} created, {} errors",
            result.synced,
            result.created.total(),
            result.errors.len()
        );
        result
    }

    async fn trigger_full_sync(&self, subject_id: &str) -> SyncResult {
        info!("Starting full sync for subject {}", subject_id);

        let mut result = SyncResult::new();
        match self.sync_subject(SyncEntity::Guests, subject_id) {
            Ok(counts) => result.record_subject(counts),
            Err(err) => {
                warn!("Full sync failed for subject {}: {}", subject_id, err);
                result.record_failure(subject_id, &err);
            }
        }
        result
    }
}
