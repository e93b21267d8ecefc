use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::clients_model::{Client, NewClient};
use super::clients_traits::ClientRepositoryTrait;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::Result;
use crate::schema::clients;
use crate::utils::short_id;

pub struct ClientRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ClientRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ClientRepository { pool, writer }
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    fn get_by_id(&self, client_id: &str) -> Result<Option<Client>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(clients::table
            .find(client_id)
            .first::<Client>(&mut conn)
            .optional()?)
    }

    fn get_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Client>> {
        Ok(clients::table
            .find(client_id)
            .first::<Client>(conn)
            .optional()?)
    }

    async fn create(&self, new_client: NewClient) -> Result<Client> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Client> {
                let mut client = new_client;
                if client.id.is_none() {
                    client.id = Some(short_id("client"));
                }

                diesel::insert_into(clients::table)
                    .values(&client)
                    .execute(conn)?;

                Ok(clients::table
                    .find(client.id.unwrap_or_default())
                    .first::<Client>(conn)?)
            })
            .await
    }
}
