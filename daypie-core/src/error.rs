//! Error types for daypie.

use thiserror::Error;

/// Errors that can occur in daypie operations.
#[derive(Error, Debug)]
pub enum DayPieError {
    #[error("Invalid time '{input}': {reason}")]
    TimeParse { input: String, reason: String },

    #[error("Invalid range key '{key}': {reason}")]
    RangeKey { key: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schedule store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DayPieError {
    pub(crate) fn time_parse(input: &str, reason: impl Into<String>) -> Self {
        DayPieError::TimeParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn range_key(key: &str, reason: impl Into<String>) -> Self {
        DayPieError::RangeKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for daypie operations.
pub type DayPieResult<T> = Result<T, DayPieError>;
