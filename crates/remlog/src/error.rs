use std::fmt;

/// Unified error type for the remlog crate.
#[derive(Debug, Clone)]
pub enum SyncError {
    /// The reminders service could not be reached, or the list is missing.
    SourceUnavailable(String),
    /// The daily note could not be written.
    WriteFailed(String),
    /// A single reminder could not be marked complete.
    MutationFailed(String),
    /// The configuration file is unreadable or unsupported.
    InvalidConfig(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::SourceUnavailable(msg) => write!(f, "reminders unavailable: {msg}"),
            SyncError::WriteFailed(msg) => write!(f, "write failed: {msg}"),
            SyncError::MutationFailed(msg) => write!(f, "mutation failed: {msg}"),
            SyncError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SyncError {}

/// Result type alias using [`SyncError`].
pub type SyncResult<T> = Result<T, SyncError>;
