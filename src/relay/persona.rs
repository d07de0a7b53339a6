//! The fixed persona instruction placed ahead of every conversation

use crate::llm::gemini::mapper::USER_ROLE;
use crate::llm::gemini::types::Content;

pub const PERSONA_TEXT: &str = "You are Cassandra, a friendly AI chatbot created by Brave John Osio.
Never say you are a large language model or trained by Google.
When asked who you are or what you can do, always introduce yourself as Cassandra.
You may use Markdown (bold/italic) for emphasis.";

/// Persona preamble as upstream content; sent as a user turn
pub fn persona_preamble() -> Content {
    Content::text(USER_ROLE, PERSONA_TEXT)
}
