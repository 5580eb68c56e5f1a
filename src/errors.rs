//! Error types for the status tracker

use std::fmt;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug)]
pub enum TrackerError {
    /// IO operation on a status log failed
    Io(std::io::Error),

    /// JSON serialization/deserialization failed
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Log line that is not a valid status record
    Malformed(String),

    /// Elevator id outside the known set
    UnknownElevator(String),

    /// Status key other than ok/warn/bad
    UnknownStatus(String),

    /// Report period key that is not recognised
    UnknownPeriod(String),

    /// Callback payload that does not match any known shape
    InvalidCallback(String),

    /// Chat transport failure
    Transport(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::Io(err) => write!(f, "IO error: {}", err),
            TrackerError::Json(err) => write!(f, "JSON error: {}", err),
            TrackerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TrackerError::Malformed(msg) => write!(f, "Malformed record: {}", msg),
            TrackerError::UnknownElevator(id) => write!(f, "Unknown elevator: {}", id),
            TrackerError::UnknownStatus(key) => write!(f, "Unknown status: {}", key),
            TrackerError::UnknownPeriod(key) => write!(f, "Unknown report period: {}", key),
            TrackerError::InvalidCallback(data) => write!(f, "Invalid callback data: {}", data),
            TrackerError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::Io(err) => Some(err),
            TrackerError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl TrackerError {
    /// True for errors caused by bad user input rather than a failing system
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrackerError::UnknownElevator(_)
                | TrackerError::UnknownStatus(_)
                | TrackerError::UnknownPeriod(_)
                | TrackerError::InvalidCallback(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Io(err)
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Json(err)
    }
}
