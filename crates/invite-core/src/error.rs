//! Error types for the wedding invite core

use thiserror::Error;

/// Errors raised while loading or resolving invitation details.
///
/// Countdown and reveal operations are total and never produce these; they
/// only surface at startup, when the details record is read and the event
/// target is resolved.
#[derive(Error, Debug)]
pub enum InviteError {
    /// Details file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Details file is not valid JSON for the expected record
    #[error("Details parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Event date is not a `YYYY-MM-DD` calendar date
    #[error("Invalid event date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Event time string does not start with a recognisable time of day
    #[error("Invalid event time '{0}'")]
    InvalidTime(String),

    /// UTC offset is not of the form `+HH:MM` / `-HH:MM`
    #[error("Invalid UTC offset '{0}'")]
    InvalidOffset(String),

    /// A required field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type alias using InviteError
pub type InviteResult<T> = Result<T, InviteError>;
