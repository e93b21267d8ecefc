use serde::{Deserialize, Serialize};

use super::sync_errors::SyncError;
use crate::errors::Error;

/// Which derivation rules a batch sync trigger maps to.
///
/// `Guests` runs the full fixed chain: the stays and legs it inserts must be
/// visible to the schedule rules inside the same subject transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncEntity {
    Guests,
    Accommodations,
    Transport,
}

impl SyncEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncEntity::Guests => "guests",
            SyncEntity::Accommodations => "accommodations",
            SyncEntity::Transport => "transport",
        }
    }
}

impl std::str::FromStr for SyncEntity {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "guests" => Ok(SyncEntity::Guests),
            "accommodations" => Ok(SyncEntity::Accommodations),
            "transport" => Ok(SyncEntity::Transport),
            other => Err(SyncError::UnknownEntity(other.to_string()).into()),
        }
    }
}

/// How many derived rows a sync run actually inserted, per module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCounts {
    pub accommodation: usize,
    pub transport: usize,
    pub schedule: usize,
}

impl CreatedCounts {
    pub fn merge(&mut self, other: CreatedCounts) {
        self.accommodation += other.accommodation;
        self.transport += other.transport;
        self.schedule += other.schedule;
    }

    pub fn total(&self) -> usize {
        self.accommodation + self.transport + self.schedule
    }
}

/// Structured outcome of a sync run, returned to the caller even on partial
/// failure so operators can see exactly which subjects succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub success: bool,
    pub synced: usize,
    pub created: CreatedCounts,
    pub errors: Vec<String>,
}

impl SyncResult {
    pub fn new() -> Self {
        SyncResult {
            success: true,
            synced: 0,
            created: CreatedCounts::default(),
            errors: Vec::new(),
        }
    }

    /// Record one committed subject.
    pub fn record_subject(&mut self, counts: CreatedCounts) {
        self.synced += 1;
        self.created.merge(counts);
    }

    /// Record one failed subject; the batch keeps going.
    pub fn record_failure(&mut self, subject_id: &str, error: &Error) {
        self.success = false;
        self.errors.push(format!("{}: {}", subject_id, error));
    }
}

impl Default for SyncResult {
    fn default() -> Self {
        Self::new()
    }
}
