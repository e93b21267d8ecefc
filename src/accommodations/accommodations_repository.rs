use std::sync::Arc;

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::accommodations_model::{AccommodationStay, NewAccommodationStay};
use super::accommodations_traits::AccommodationRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::accommodation_stays;

pub struct AccommodationRepository {
    pool: Arc<DbPool>,
}

impl AccommodationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AccommodationRepository { pool }
    }
}

impl AccommodationRepositoryTrait for AccommodationRepository {
    fn find_by_guest_in_transaction(
        &self,
        guest_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<AccommodationStay>> {
        Ok(accommodation_stays::table
            .filter(accommodation_stays::guest_id.eq(guest_id))
            .first::<AccommodationStay>(conn)
            .optional()?)
    }

    fn insert_in_transaction(
        &self,
        new_stay: NewAccommodationStay,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        Ok(diesel::insert_into(accommodation_stays::table)
            .values(&new_stay)
            .on_conflict(accommodation_stays::guest_id)
            .do_nothing()
            .execute(conn)?)
    }

    fn list_by_client_in_transaction(
        &self,
        client_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<AccommodationStay>> {
        Ok(accommodation_stays::table
            .filter(accommodation_stays::client_id.eq(client_id))
            .order(accommodation_stays::created_at.asc())
            .load::<AccommodationStay>(conn)?)
    }

    fn list_by_client(&self, client_id: &str) -> Result<Vec<AccommodationStay>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(accommodation_stays::table
            .filter(accommodation_stays::client_id.eq(client_id))
            .order(accommodation_stays::created_at.asc())
            .load::<AccommodationStay>(&mut conn)?)
    }
}
