use std::sync::Arc;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::schedule_model::{NewScheduleEntry, ScheduleEntry, SourceModule};
use super::schedule_traits::ScheduleRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::schedule_entries;

pub struct ScheduleRepository {
    pool: Arc<DbPool>,
}

impl ScheduleRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ScheduleRepository { pool }
    }
}

impl ScheduleRepositoryTrait for ScheduleRepository {
    fn find_by_source_in_transaction(
        &self,
        source_module: SourceModule,
        source_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<ScheduleEntry>> {
        Ok(schedule_entries::table
            .filter(schedule_entries::source_module.eq(source_module.as_str()))
            .filter(schedule_entries::source_id.eq(source_id))
            .first::<ScheduleEntry>(conn)
            .optional()?)
    }

    fn insert_in_transaction(
        &self,
        new_entry: NewScheduleEntry,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        Ok(diesel::insert_into(schedule_entries::table)
            .values(&new_entry)
            .on_conflict((
                schedule_entries::source_module,
                schedule_entries::source_id,
            ))
            .do_nothing()
            .execute(conn)?)
    }

    fn list_by_client(&self, client_id: &str) -> Result<Vec<ScheduleEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(schedule_entries::table
            .filter(schedule_entries::client_id.eq(client_id))
            .order(schedule_entries::start_time.asc())
            .load::<ScheduleEntry>(&mut conn)?)
    }
}
