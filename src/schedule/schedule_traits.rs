use diesel::SqliteConnection;

use super::schedule_model::{NewScheduleEntry, ScheduleEntry, SourceModule};
use crate::errors::Result;

/// Trait for schedule-entry repository operations.
pub trait ScheduleRepositoryTrait: Send + Sync {
    /// Look up the entry derived from a source row, if any
    fn find_by_source_in_transaction(
        &self,
        source_module: SourceModule,
        source_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<ScheduleEntry>>;

    /// Insert an entry unless one already exists for its source row.
    ///
    /// Returns the number of rows actually inserted (0 or 1); the unique
    /// index on `(source_module, source_id)` makes the insert a no-op on
    /// conflict.
    fn insert_in_transaction(
        &self,
        new_entry: NewScheduleEntry,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    /// List all entries of a client
    fn list_by_client(&self, client_id: &str) -> Result<Vec<ScheduleEntry>>;
}
