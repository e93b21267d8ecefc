use diesel::SqliteConnection;

use super::transport_model::{NewTransportLeg, TransportLeg};
use crate::errors::Result;

/// Trait for transport-leg repository operations.
///
/// Like stays, legs are insert-only from the engine's perspective.
pub trait TransportRepositoryTrait: Send + Sync {
    /// Look up the leg derived for a guest, if any
    fn find_by_guest_in_transaction(
        &self,
        guest_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<TransportLeg>>;

    /// Insert a leg unless one already exists for the guest.
    ///
    /// Returns the number of rows actually inserted (0 or 1).
    fn insert_in_transaction(
        &self,
        new_leg: NewTransportLeg,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;

    /// List all legs of a client inside an open transaction
    fn list_by_client_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<TransportLeg>>;

    /// List all legs of a client
    fn list_by_client(&self, client_id: &str) -> Result<Vec<TransportLeg>>;
}
