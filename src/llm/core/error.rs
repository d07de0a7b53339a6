//! Error types for the LLM layer

use thiserror::Error;

/// Errors that can occur when calling the upstream generation API
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failures (status 0 when no response was received)
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

// The request URL carries the API key as a query parameter, so it is dropped.
impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        LlmError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
