use thiserror::Error;

/// Errors raised by the cascade sync engine.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Client not found: {0}")]
    SubjectNotFound(String),

    #[error("Unknown sync entity type: {0}")]
    UnknownEntity(String),
}
