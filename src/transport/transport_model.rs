use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DATE_FORMAT;

/// Which direction a transport leg covers.
///
/// Current policy is one leg per guest (the arrival pickup); whether guests
/// with separate arrival and departure legs become a supported case is an
/// open product question, so the type is kept but the uniqueness key stays
/// on the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegType {
    Arrival,
    Departure,
}

impl LegType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegType::Arrival => "ARRIVAL",
            LegType::Departure => "DEPARTURE",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "ARRIVAL" => Some(LegType::Arrival),
            "DEPARTURE" => Some(LegType::Departure),
            _ => None,
        }
    }

    /// Label used in derived schedule-entry metadata.
    pub fn direction_label(&self) -> &'static str {
        match self {
            LegType::Arrival => "pickup",
            LegType::Departure => "drop-off",
        }
    }
}

/// A guest's transport leg, derived from the guest record by the cascade
/// sync engine and owned by the transport feature afterwards.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transport_legs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransportLeg {
    pub id: String,
    pub client_id: String,
    pub guest_id: String,
    pub leg_type: String,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub pickup_from: Option<String>,
    pub drop_to: Option<String>,
    pub vehicle_info: Option<String>,
    pub created_at: String,
}

impl TransportLeg {
    pub fn leg_type(&self) -> LegType {
        LegType::from_str(&self.leg_type).unwrap_or(LegType::Arrival)
    }

    /// Pickup date, when present and well-formed.
    pub fn pickup_date(&self) -> Option<NaiveDate> {
        self.pickup_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transport_legs)]
#[serde(rename_all = "camelCase")]
pub struct NewTransportLeg {
    pub id: String,
    pub client_id: String,
    pub guest_id: String,
    pub leg_type: String,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub pickup_from: Option<String>,
    pub drop_to: Option<String>,
    pub vehicle_info: Option<String>,
    pub created_at: String,
}
