// Request and response bodies of the chat endpoint

use serde::{Deserialize, Deserializer, Serialize};

// Chat role; anything outside the known set reads as `User`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    User,
    Assistant,
    System,
}

impl<'de> Deserialize<'de> for ChatRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("assistant") => ChatRole::Assistant,
            Some("system") => ChatRole::System,
            _ => ChatRole::User,
        })
    }
}

// One turn of the caller's conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationRequest {
    pub messages: Vec<ChatTurn>,
}

// Response body: `{"reply": ...}` or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyResult {
    Reply { reply: String },
    Error { error: String },
}
