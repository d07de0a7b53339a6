#![allow(dead_code)]

use async_trait::async_trait;
use chat_relay::config::RelayConfig;
use chat_relay::llm::gemini::types::{GenerateContentRequest, GenerateContentResponse};
use chat_relay::llm::{ContentGenerator, LlmError};
use chat_relay::relay::Relay;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Upstream body returned for a plain "hello" reply
pub const HELLO_RESPONSE: &str = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;

/// Key used by every test configuration
pub const TEST_API_KEY: &str = "test-key";

/// In-memory upstream that records what it was asked and answers with a canned body
pub struct StubGenerator {
    response: Result<String, u16>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, GenerateContentRequest)>>,
}

impl StubGenerator {
    /// Answer every call by parsing `body` as the upstream response
    pub fn replying(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Fail every call with a transport error
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Err(0),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// API key and payload of the most recent call
    pub fn last_request(&self) -> Option<(String, GenerateContentRequest)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate_content(
        &self,
        api_key: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((api_key.to_string(), request));

        match &self.response {
            Ok(body) => Ok(serde_json::from_str(body)?),
            Err(status) => Err(LlmError::HttpError {
                status: *status,
                body: "connection refused".to_string(),
            }),
        }
    }
}

/// Configuration with the test key and defaults for everything else
pub fn test_config() -> RelayConfig {
    RelayConfig::new(Some(TEST_API_KEY.to_string()))
}

pub fn relay_with(config: RelayConfig, stub: &Arc<StubGenerator>) -> Arc<Relay> {
    Arc::new(Relay::new(config, stub.clone()))
}
