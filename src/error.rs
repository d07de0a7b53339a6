//! Error taxonomy of the chat endpoint

use thiserror::Error;
use warp::http::StatusCode;

use crate::llm::LlmError;

pub const NO_MESSAGES: &str = "No messages provided";
pub const EMPTY_CONTENT: &str = "Message content is empty";

/// Everything that can stop a chat request from producing a reply
///
/// `Display` is for logs. Callers only see [`RelayError::client_message`].
#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or malformed request body
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Anything but POST
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    /// The upstream API key is not configured
    #[error("GEMINI_API_KEY is not configured")]
    ServerMisconfigured,

    /// The upstream answered without a usable reply
    #[error("Upstream returned no reply text")]
    UpstreamEmpty,

    /// Transport or decoding failure during the upstream call
    #[error("Upstream call failed: {0}")]
    Upstream(#[from] LlmError),
}

impl RelayError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::ServerMisconfigured
            | RelayError::UpstreamEmpty
            | RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short message placed in the `error` field of the response body
    pub fn client_message(&self) -> &'static str {
        match self {
            RelayError::InvalidInput(message) => *message,
            RelayError::MethodNotAllowed(_) => "Method not allowed",
            RelayError::ServerMisconfigured => "Server misconfiguration",
            RelayError::UpstreamEmpty => "No reply from Gemini",
            RelayError::Upstream(_) => "Internal Server Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::InvalidInput(NO_MESSAGES).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::MethodNotAllowed("GET".to_string()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            RelayError::ServerMisconfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(RelayError::UpstreamEmpty.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(
            RelayError::InvalidInput(EMPTY_CONTENT).client_message(),
            "Message content is empty"
        );
        assert_eq!(
            RelayError::MethodNotAllowed("PUT".to_string()).client_message(),
            "Method not allowed"
        );
        assert_eq!(
            RelayError::ServerMisconfigured.client_message(),
            "Server misconfiguration"
        );
        assert_eq!(RelayError::UpstreamEmpty.client_message(), "No reply from Gemini");
    }

    #[test]
    fn test_upstream_error_hides_details() {
        let err: RelayError = LlmError::HttpError {
            status: 0,
            body: "connection refused".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal Server Error");
        assert!(err.to_string().contains("connection refused"));
    }
}
