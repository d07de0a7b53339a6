//! The relay: validate a chat request, prefix the persona, call upstream once,
//! and hand back the first reply text.

pub mod history;
pub mod persona;

use std::sync::Arc;

use tracing::{debug, warn};
use warp::http::Method;

use crate::config::{EmptyReplyPolicy, RelayConfig};
use crate::error::{RelayError, NO_MESSAGES};
use crate::llm::gemini::mapper::extract_reply;
use crate::llm::gemini::types::GenerateContentRequest;
use crate::llm::ContentGenerator;
use crate::models::{ChatTurn, ConversationRequest};

pub use persona::{persona_preamble, PERSONA_TEXT};

/// Reply used by [`EmptyReplyPolicy::Fallback`]
pub const FALLBACK_REPLY: &str = "⚠️ Sorry, Cassandra couldn’t generate a reply.";

/// Stateless request handler shared by every connection
pub struct Relay {
    config: RelayConfig,
    generator: Arc<dyn ContentGenerator>,
}

impl Relay {
    pub fn new(config: RelayConfig, generator: Arc<dyn ContentGenerator>) -> Self {
        Self { config, generator }
    }

    /// Handle one chat request and return the reply text
    ///
    /// Input is validated before the credential is checked, and both happen
    /// before the single upstream call.
    pub async fn handle_chat(&self, method: &Method, body: &[u8]) -> Result<String, RelayError> {
        if *method != Method::POST {
            return Err(RelayError::MethodNotAllowed(method.to_string()));
        }

        let request = parse_conversation(body)?;
        let payload = self.build_payload(request.messages)?;
        let api_key = self
            .config
            .api_key()
            .ok_or(RelayError::ServerMisconfigured)?;

        debug!(contents = payload.contents.len(), "forwarding conversation");
        let response = self.generator.generate_content(api_key, payload).await?;

        if let Some(reply) = extract_reply(&response) {
            return Ok(reply);
        }

        let finish_reason = response
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref());
        warn!(
            candidates = response.candidates.len(),
            finish_reason,
            policy = ?self.config.empty_reply,
            "no reply text from upstream"
        );

        match self.config.empty_reply {
            EmptyReplyPolicy::Error => Err(RelayError::UpstreamEmpty),
            EmptyReplyPolicy::Fallback => Ok(FALLBACK_REPLY.to_string()),
        }
    }

    /// Upstream payload: the persona preamble followed by the translated turns
    pub fn build_payload(
        &self,
        messages: Vec<ChatTurn>,
    ) -> Result<GenerateContentRequest, RelayError> {
        let turns = self.config.history.translate(messages)?;

        let mut contents = Vec::with_capacity(turns.len() + 1);
        contents.push(persona_preamble());
        contents.extend(turns);

        Ok(GenerateContentRequest { contents })
    }
}

/// Parse the body into a non-empty conversation
fn parse_conversation(body: &[u8]) -> Result<ConversationRequest, RelayError> {
    let request: ConversationRequest = serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "rejecting request body");
        RelayError::InvalidInput(NO_MESSAGES)
    })?;

    if request.messages.is_empty() {
        return Err(RelayError::InvalidInput(NO_MESSAGES));
    }

    Ok(request)
}
