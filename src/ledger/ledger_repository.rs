use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::ledger_errors::LedgerError;
use super::ledger_model::{CheckOutcome, LedgerEntry, LedgerStatus, NewLedgerEntry};
use super::ledger_traits::LedgerRepositoryTrait;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::Result;
use crate::schema::webhook_ledger;

pub struct LedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LedgerRepository { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn check_and_record(&self, new_entry: NewLedgerEntry) -> Result<CheckOutcome> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CheckOutcome> {
                // Insert-or-ignore and fetch happen in the same writer
                // transaction, so exactly one row ever exists per key even
                // under concurrent deliveries.
                let inserted = diesel::insert_into(webhook_ledger::table)
                    .values(&new_entry)
                    .on_conflict((
                        webhook_ledger::provider,
                        webhook_ledger::external_event_id,
                    ))
                    .do_nothing()
                    .execute(conn)?;

                let entry = webhook_ledger::table
                    .filter(webhook_ledger::provider.eq(&new_entry.provider))
                    .filter(webhook_ledger::external_event_id.eq(&new_entry.external_event_id))
                    .first::<LedgerEntry>(conn)?;

                Ok(CheckOutcome {
                    is_duplicate: inserted == 0,
                    entry,
                })
            })
            .await
    }

    async fn mark_processed(
        &self,
        ledger_id: &str,
        status: LedgerStatus,
        duration_ms: i64,
        error: Option<String>,
    ) -> Result<()> {
        let id = ledger_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let processed_at = if status == LedgerStatus::Processed {
                    Some(Utc::now().to_rfc3339())
                } else {
                    None
                };

                let updated = diesel::update(webhook_ledger::table.find(&id))
                    .set((
                        webhook_ledger::status.eq(status.as_str()),
                        webhook_ledger::processed_at.eq(processed_at),
                        webhook_ledger::duration_ms.eq(Some(duration_ms)),
                        webhook_ledger::error.eq(error),
                    ))
                    .execute(conn)?;

                if updated == 0 {
                    return Err(LedgerError::NotFound(id.clone()).into());
                }

                Ok(())
            })
            .await
    }

    async fn increment_retry(&self, ledger_id: &str) -> Result<i32> {
        let id = ledger_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<i32> {
                let updated = diesel::update(webhook_ledger::table.find(&id))
                    .set(webhook_ledger::retry_count.eq(webhook_ledger::retry_count + 1))
                    .execute(conn)?;

                if updated == 0 {
                    return Err(LedgerError::NotFound(id.clone()).into());
                }

                Ok(webhook_ledger::table
                    .find(&id)
                    .select(webhook_ledger::retry_count)
                    .first::<i32>(conn)?)
            })
            .await
    }

    fn get_by_id(&self, ledger_id: &str) -> Result<Option<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(webhook_ledger::table
            .find(ledger_id)
            .first::<LedgerEntry>(&mut conn)
            .optional()?)
    }

    fn find_by_provider_event(
        &self,
        provider: &str,
        external_event_id: &str,
    ) -> Result<Option<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(webhook_ledger::table
            .filter(webhook_ledger::provider.eq(provider))
            .filter(webhook_ledger::external_event_id.eq(external_event_id))
            .first::<LedgerEntry>(&mut conn)
            .optional()?)
    }

    fn list_failed(&self) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(webhook_ledger::table
            .filter(webhook_ledger::status.eq(LedgerStatus::Failed.as_str()))
            .order(webhook_ledger::created_at.asc())
            .load::<LedgerEntry>(&mut conn)?)
    }

    fn list_by_provider(&self, provider: &str) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(webhook_ledger::table
            .filter(webhook_ledger::provider.eq(provider))
            .order(webhook_ledger::created_at.desc())
            .load::<LedgerEntry>(&mut conn)?)
    }
}
