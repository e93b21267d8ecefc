use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A guest attached to a client. Owned by the guest-management feature;
/// the sync engine only reads these rows.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::guests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub client_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub accommodation_required: i32,
    pub transport_required: i32,
    pub arrival_at: Option<String>,
    pub departure_at: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub room_preference: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub pickup_from: Option<String>,
    pub drop_to: Option<String>,
    pub transport_type: Option<String>,
    pub arrival_mode: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Guest {
    pub fn requires_accommodation(&self) -> bool {
        self.accommodation_required == 1
    }

    pub fn requires_transport(&self) -> bool {
        self.transport_required == 1
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Model for creating a new guest
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::guests)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub id: Option<String>,
    pub client_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub accommodation_required: i32,
    pub transport_required: i32,
    pub arrival_at: Option<String>,
    pub departure_at: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub room_preference: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub pickup_from: Option<String>,
    pub drop_to: Option<String>,
    pub transport_type: Option<String>,
    pub arrival_mode: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
