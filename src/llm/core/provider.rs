//! Provider trait for content generation backends

use std::sync::Arc;

use async_trait::async_trait;

use super::error::LlmError;
use crate::config::RelayConfig;
use crate::llm::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use crate::llm::gemini::GeminiClient;

/// Interface the relay uses to reach the upstream model
///
/// Implementations issue exactly one request per call. The credential is
/// passed per call so the relay decides whether a call may happen at all.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Send `request` upstream and return the parsed response body
    async fn generate_content(
        &self,
        api_key: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError>;
}

/// Create the upstream client described by `config`
///
/// # Example
///
/// ```rust,no_run
/// use chat_relay::config::RelayConfig;
/// use chat_relay::llm::create_provider;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RelayConfig::new(Some("my-key".to_string()));
/// let provider = create_provider(&config)?;
/// # Ok(())
/// # }
/// ```
pub fn create_provider(config: &RelayConfig) -> Result<Arc<dyn ContentGenerator>, LlmError> {
    let client = GeminiClient::new(config.base_url.clone(), config.model.clone())?;
    Ok(Arc::new(client))
}
