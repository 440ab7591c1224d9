use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    /// A required input field was absent or empty. Caller's fault, never
    /// retried.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A status token outside the lead pipeline vocabulary.
    #[error("Invalid lead status: {0}")]
    InvalidStatus(String),

    /// An expected lane or column is missing on the external side. The
    /// operator must fix the board or sheet setup; retrying does not help.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The external collaborator failed. Propagated verbatim; this core
    /// performs no retry or backoff.
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),
}
