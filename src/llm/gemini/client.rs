//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::llm::core::{error::LlmError, provider::ContentGenerator};

use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Public Generative Language API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini `generateContent` endpoint, authenticated by API key
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Scheme and host, without a trailing slash
    base_url: String,
    /// Model identifier, e.g. "gemini-1.5-flash"
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let http_client = Client::builder().build().map_err(|e| LlmError::HttpError {
            status: 0,
            body: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Build the endpoint URL; the key is appended as a query parameter per request
    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let url = self.build_endpoint_url();
        debug!(%url, contents = request.contents.len(), "calling gemini");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Error bodies are JSON too; they parse into a response without candidates.
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), raw = %body, "gemini raw response");

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                error = ?parsed.error,
                "gemini returned a non-success status"
            );
        }

        Ok(parsed)
    }
}
