use std::time::Instant;

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::short_id;

/// Processing state of a ledger entry.
///
/// `Pending -> Processed` on success, `Pending -> Failed` on a handler
/// failure. A failed entry may be redelivered; the row identity and retry
/// counter persist across attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerStatus {
    Pending,
    Processed,
    Failed,
}

impl LedgerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerStatus::Pending => "PENDING",
            LedgerStatus::Processed => "PROCESSED",
            LedgerStatus::Failed => "FAILED",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(LedgerStatus::Pending),
            "PROCESSED" => Some(LedgerStatus::Processed),
            "FAILED" => Some(LedgerStatus::Failed),
            _ => None,
        }
    }
}

/// One externally-delivered event, recorded on first sight and kept forever
/// as the audit trail. `(provider, external_event_id)` is unique; only the
/// event-processing wrapper mutates these rows.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::webhook_ledger)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub provider: String,
    pub external_event_id: String,
    pub event_type: String,
    pub payload: String,
    pub status: String,
    pub processed_at: Option<String>,
    pub error: Option<String>,
    pub retry_count: i32,
    pub duration_ms: Option<i64>,
    pub created_at: String,
}

impl LedgerEntry {
    pub fn status(&self) -> LedgerStatus {
        LedgerStatus::from_str(&self.status).unwrap_or(LedgerStatus::Pending)
    }

    pub fn is_processed(&self) -> bool {
        self.status() == LedgerStatus::Processed
    }
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::webhook_ledger)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerEntry {
    pub id: String,
    pub provider: String,
    pub external_event_id: String,
    pub event_type: String,
    pub payload: String,
    pub status: String,
    pub retry_count: i32,
    pub created_at: String,
}

impl NewLedgerEntry {
    pub fn new(
        provider: &str,
        external_event_id: &str,
        event_type: &str,
        payload: &serde_json::Value,
    ) -> Result<Self> {
        Ok(NewLedgerEntry {
            id: short_id("wbl"),
            provider: provider.to_string(),
            external_event_id: external_event_id.to_string(),
            event_type: event_type.to_string(),
            payload: serde_json::to_string(payload)?,
            status: LedgerStatus::Pending.as_str().to_string(),
            retry_count: 0,
            created_at: Utc::now().to_rfc3339(),
        })
    }
}

/// Result of the atomic insert-or-fetch on the ledger. `entry` is always
/// the surviving row for the key, whether it was just inserted or not.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub is_duplicate: bool,
    pub entry: LedgerEntry,
}

/// Context handed to an event handler for one processing attempt.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub ledger_id: String,
    pub provider: String,
    pub external_event_id: String,
    pub event_type: String,
    pub started_at: Instant,
}

/// Outcome of running an event through the idempotency wrapper.
///
/// A duplicate delivery is a value, not an error: the caller acknowledges
/// it to the provider without re-running any side effects.
#[derive(Debug)]
pub enum ProcessOutcome<T> {
    Processed(T),
    Duplicate {
        ledger_id: String,
        status: LedgerStatus,
    },
}

impl<T> ProcessOutcome<T> {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ProcessOutcome::Duplicate { .. })
    }
}
