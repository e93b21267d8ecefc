use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::DATE_FORMAT;

/// A client engagement (one event); the subject of cascade sync runs.
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
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub event_date: String,
    pub venue: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Client {
    /// The reference date derivation fallbacks are anchored to.
    pub fn reference_date(&self) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(&self.event_date, DATE_FORMAT)?)
    }
}

/// Model for creating a new client
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub id: Option<String>,
    pub name: String,
    pub event_date: String,
    pub venue: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
