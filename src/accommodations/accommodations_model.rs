use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DATE_FORMAT;

/// A guest's accommodation booking, derived from the guest record by the
/// cascade sync engine and owned by the accommodation feature afterwards.
/// At most one stay exists per guest.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accommodation_stays)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccommodationStay {
    pub id: String,
    pub client_id: String,
    pub guest_id: String,
    pub hotel_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub room_type: Option<String>,
    pub created_at: String,
}

impl AccommodationStay {
    /// Check-in date, when present and well-formed.
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        self.check_in
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accommodation_stays)]
#[serde(rename_all = "camelCase")]
pub struct NewAccommodationStay {
    pub id: String,
    pub client_id: String,
    pub guest_id: String,
    pub hotel_name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub room_type: Option<String>,
    pub created_at: String,
}
