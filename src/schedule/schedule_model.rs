use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Which module a derived schedule entry originates from. Together with the
/// source row id this is the entry's idempotency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceModule {
    Accommodation,
    Transport,
}

impl SourceModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceModule::Accommodation => "ACCOMMODATION",
            SourceModule::Transport => "TRANSPORT",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "ACCOMMODATION" => Some(SourceModule::Accommodation),
            "TRANSPORT" => Some(SourceModule::Transport),
            _ => None,
        }
    }
}

/// Metadata attached to a derived schedule entry, identifying the guest it
/// was derived for and the direction of the movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetadata {
    pub guest_id: String,
    pub direction: String,
}

/// A calendar entry derived from an accommodation stay or transport leg.
/// At most one entry exists per `(source_module, source_id)`.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::schedule_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: String,
    pub source_module: String,
    pub source_id: String,
    pub metadata: Option<String>,
    pub created_at: String,
}

impl ScheduleEntry {
    pub fn source_module(&self) -> Option<SourceModule> {
        SourceModule::from_str(&self.source_module)
    }

    /// Parsed metadata, when present and well-formed.
    pub fn parsed_metadata(&self) -> Option<ScheduleMetadata> {
        self.metadata
            .as_deref()
            .and_then(|m| serde_json::from_str(m).ok())
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::schedule_entries)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleEntry {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: String,
    pub source_module: String,
    pub source_id: String,
    pub metadata: Option<String>,
    pub created_at: String,
}
