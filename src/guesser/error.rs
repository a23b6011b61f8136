//! Error types for the guesser's fallible edges
//!
//! Inference itself never fails: ambiguous data falls back to `string` and
//! empty samples produce empty trees. These errors only cover reading
//! records and configuration.

use thiserror::Error;

/// Errors that can occur while loading records or configuration
#[derive(Error, Debug, Clone)]
pub enum GuesserError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Records are neither an array, a `data` envelope nor a single object
    #[error("Invalid record structure: expected object or array of objects, found {0}")]
    InvalidStructure(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GuesserError {
    fn from(e: serde_json::Error) -> Self {
        GuesserError::JsonParse(e.to_string())
    }
}
