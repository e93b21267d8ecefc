use std::sync::Arc;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::transport_model::{NewTransportLeg, TransportLeg};
use super::transport_traits::TransportRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::transport_legs;

pub struct TransportRepository {
    pool: Arc<DbPool>,
}

impl TransportRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TransportRepository { pool }
    }
}

impl TransportRepositoryTrait for TransportRepository {
    fn find_by_guest_in_transaction(
        &self,
        guest_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<TransportLeg>> {
        Ok(transport_legs::table
            .filter(transport_legs::guest_id.eq(guest_id))
            .first::<TransportLeg>(conn)
            .optional()?)
    }

    fn insert_in_transaction(
        &self,
        new_leg: NewTransportLeg,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        Ok(diesel::insert_into(transport_legs::table)
            .values(&new_leg)
            .on_conflict(transport_legs::guest_id)
            .do_nothing()
            .execute(conn)?)
    }

    fn list_by_client_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<TransportLeg>> {
        Ok(transport_legs::table
            .filter(transport_legs::client_id.eq(client_id))
            .order(transport_legs::created_at.asc())
            .load::<TransportLeg>(conn)?)
    }

    fn list_by_client(&self, client_id: &str) -> Result<Vec<TransportLeg>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(transport_legs::table
            .filter(transport_legs::client_id.eq(client_id))
            .order(transport_legs::created_at.asc())
            .load::<TransportLeg>(&mut conn)?)
    }
}
