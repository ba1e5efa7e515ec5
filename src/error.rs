//! Error types for the event engine

use thiserror::Error;

/// Main error type for the event engine
///
/// Every variant is a programmer or content-authoring error. None of them is
/// transient, so nothing here is ever retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("Cannot sample from an empty sequence")]
    EmptySequence,

    #[error("Choice '{choice}' does not belong to event '{event}'")]
    InvalidChoice { event: String, choice: String },

    #[error("Malformed event '{event}': {reason}")]
    MalformedEvent { event: String, reason: String },

    #[error("Duplicate event title: {0}")]
    DuplicateEvent(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl EventError {
    pub(crate) fn malformed(event: &str, reason: impl Into<String>) -> Self {
        EventError::MalformedEvent {
            event: event.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Deserialization(err.to_string())
    }
}

/// Result type alias for the event engine
pub type Result<T> = std::result::Result<T, EventError>;
