use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::guests_model::{Guest, NewGuest};
use super::guests_traits::GuestRepositoryTrait;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::Result;
use crate::schema::guests;
use crate::utils::short_id;

pub struct GuestRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GuestRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GuestRepository { pool, writer }
    }
}

#[async_trait]
impl GuestRepositoryTrait for GuestRepository {
    fn get_by_id(&self, guest_id: &str) -> Result<Option<Guest>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(guests::table
            .find(guest_id)
            .first::<Guest>(&mut conn)
            .optional()?)
    }

    fn get_in_transaction(
        &self,
        guest_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Guest>> {
        Ok(guests::table
            .find(guest_id)
            .first::<Guest>(conn)
            .optional()?)
    }

    fn list_by_client(&self, client_id: &str) -> Result<Vec<Guest>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(guests::table
            .filter(guests::client_id.eq(client_id))
            .order((guests::last_name.asc(), guests::first_name.asc()))
            .load::<Guest>(&mut conn)?)
    }

    fn list_by_client_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Guest>> {
        Ok(guests::table
            .filter(guests::client_id.eq(client_id))
            .order((guests::last_name.asc(), guests::first_name.asc()))
            .load::<Guest>(conn)?)
    }

    async fn create(&self, new_guest: NewGuest) -> Result<Guest> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Guest> {
                let mut guest = new_guest;
                if guest.id.is_none() {
                    guest.id = Some(short_id("guest"));
                }

                diesel::insert_into(guests::table)
                    .values(&guest)
                    .execute(conn)?;

                Ok(guests::table
                    .find(guest.id.unwrap_or_default())
                    .first::<Guest>(conn)?)
            })
            .await
    }
}
