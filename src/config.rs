//! Relay configuration

use std::fmt;

use clap::ValueEnum;

use crate::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Default listen port for the server binary
pub const DEFAULT_PORT: u16 = 3000;

/// Which part of the conversation is forwarded upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HistoryMode {
    /// Every turn, in order
    #[default]
    Full,
    /// Only the final turn, which must have non-blank content
    Last,
}

/// What to answer when the upstream response carries no usable text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EmptyReplyPolicy {
    /// 500 "No reply from Gemini"
    #[default]
    Error,
    /// 200 with a fixed apology as the reply
    ///
    /// Unlike `Error`, this answers an empty upstream reply with a success
    /// status rather than a 500, matching the standalone server behavior.
    Fallback,
}

/// Settings injected into the relay at construction time
#[derive(Clone)]
pub struct RelayConfig {
    /// Upstream API key; requests fail with a misconfiguration error without it
    pub api_key: Option<String>,
    /// Upstream model identifier
    pub model: String,
    /// Upstream scheme and host
    pub base_url: String,
    pub history: HistoryMode,
    pub empty_reply: EmptyReplyPolicy,
}

impl RelayConfig {
    /// Create a configuration with defaults for everything but the key
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            history: HistoryMode::default(),
            empty_reply: EmptyReplyPolicy::default(),
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the upstream base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the history mode
    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    /// Set the empty reply policy
    pub fn with_empty_reply(mut self, empty_reply: EmptyReplyPolicy) -> Self {
        self.empty_reply = empty_reply;
        self
    }

    /// The API key, treating an empty or blank value as missing
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

// Hand-written so the key never reaches the logs.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("history", &self.history)
            .field("empty_reply", &self.empty_reply)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RelayConfig::new(Some("key".to_string()));
        assert_eq!(config.api_key(), Some("key"));
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.history, HistoryMode::Full);
        assert_eq!(config.empty_reply, EmptyReplyPolicy::Error);
    }

    #[test]
    fn test_config_builder() {
        let config = RelayConfig::default()
            .with_model("gemini-2.5-flash")
            .with_base_url("http://localhost:9000")
            .with_history(HistoryMode::Last)
            .with_empty_reply(EmptyReplyPolicy::Fallback);

        assert_eq!(config.api_key(), None);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.history, HistoryMode::Last);
        assert_eq!(config.empty_reply, EmptyReplyPolicy::Fallback);
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert_eq!(RelayConfig::new(Some(String::new())).api_key(), None);
        assert_eq!(RelayConfig::new(Some("  ".to_string())).api_key(), None);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = RelayConfig::new(Some("super-secret".to_string()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(HistoryMode::from_str("last", false), Ok(HistoryMode::Last));
        assert_eq!(
            EmptyReplyPolicy::from_str("fallback", false),
            Ok(EmptyReplyPolicy::Fallback)
        );
    }
}
