use async_trait::async_trait;
use diesel::SqliteConnection;

use super::guests_model::{Guest, NewGuest};
use crate::errors::Result;

/// Trait for guest repository operations
#[async_trait]
pub trait GuestRepositoryTrait: Send + Sync {
    /// Get a guest by ID
    fn get_by_id(&self, guest_id: &str) -> Result<Option<Guest>>;

    /// Get a guest by ID inside an open transaction
    fn get_in_transaction(
        &self,
        guest_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Guest>>;

    /// List all guests of a client
    fn list_by_client(&self, client_id: &str) -> Result<Vec<Guest>>;

    /// List all guests of a client inside an open transaction
    fn list_by_client_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Guest>>;

    /// Create a new guest (bulk-import surface)
    async fn create(&self, new_guest: NewGuest) -> Result<Guest>;
}
