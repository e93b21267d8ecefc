use diesel::SqliteConnection;

use super::accommodations_model::{AccommodationStay, NewAccommodationStay};
use crate::errors::Result;

/// Trait for accommodation-stay repository operations.
///
/// The sync engine only ever inserts stays that are absent; updating or
/// deleting an existing stay belongs to the accommodation feature.
pub trait AccommodationRepositoryTrait: Send + Sync {
    /// Look up the stay derived for a guest, if any
    fn find_by_guest_in_transaction(
        &self,
        guest_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<AccommodationStay>>;

    /// Insert a stay unless one already exists for the guest.
    ///
    /// Returns the number of rows actually inserted (0 or 1); the unique
    /// index on `guest_id` makes the insert a no-op on conflict.
    fn insert_in_transaction(
        &self,
        new_stay: NewAccommodationStay,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    /// List all stays of a client inside an open transaction
    fn list_by_client_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<AccommodationStay>>;

    /// List all stays of a client
    fn list_by_client(&self, client_id: &str) -> Result<Vec<AccommodationStay>>;
}
