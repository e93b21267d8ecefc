use async_trait::async_trait;
use diesel::SqliteConnection;

use super::clients_model::{Client, NewClient};
use crate::errors::Result;

/// Trait for client repository operations
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    /// Get a client by ID
    fn get_by_id(&self, client_id: &str) -> Result<Option<Client>>;

    /// Get a client by ID inside an open transaction
    fn get_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Client>>;

    /// Create a new client (bulk-import surface)
    async fn create(&self, new_client: NewClient) -> Result<Client>;
}
