//! Mapping between chat turns and Gemini types

use crate::models::{ChatRole, ChatTurn};

use super::types::{Content, GenerateContentResponse};

/// Upstream role for user-side turns
pub const USER_ROLE: &str = "user";
/// Upstream role for assistant turns
pub const ASSISTANT_ROLE: &str = "assistant";

/// Map a chat role to the upstream role string
///
/// `assistant` is kept as is; user and system turns both go up as `user`
/// since this integration has no system role.
pub fn to_gemini_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Assistant => ASSISTANT_ROLE,
        ChatRole::User | ChatRole::System => USER_ROLE,
    }
}

/// Convert a chat turn to Gemini's content format
pub fn to_gemini_content(turn: ChatTurn) -> Content {
    Content::text(to_gemini_role(turn.role), turn.content)
}

/// Pull the reply text out of `candidates[0].content.parts[0].text`
///
/// Returns `None` when any step of the path is missing or the text is blank.
pub fn extract_reply(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .as_deref()?
        .trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::gemini::types::{Candidate, Part};

    fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: "model".to_string(),
                    parts,
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_role_translation() {
        assert_eq!(to_gemini_role(ChatRole::Assistant), "assistant");
        assert_eq!(to_gemini_role(ChatRole::User), "user");
        assert_eq!(to_gemini_role(ChatRole::System), "user");
    }

    #[test]
    fn test_to_gemini_content() {
        let content = to_gemini_content(ChatTurn::assistant("Hi there"));
        assert_eq!(content.role, "assistant");
        assert_eq!(content.parts, vec![Part::text("Hi there")]);
    }

    #[test]
    fn test_extract_reply() {
        let response = response_with_parts(vec![Part::text("hello"), Part::text("ignored")]);
        assert_eq!(extract_reply(&response), Some("hello".to_string()));
    }

    #[test]
    fn test_extract_reply_trims_whitespace() {
        let response = response_with_parts(vec![Part::text("\n  hello  \n")]);
        assert_eq!(extract_reply(&response), Some("hello".to_string()));
    }

    #[test]
    fn test_extract_reply_missing_pieces() {
        assert_eq!(extract_reply(&GenerateContentResponse::default()), None);
        assert_eq!(extract_reply(&response_with_parts(vec![])), None);
        assert_eq!(extract_reply(&response_with_parts(vec![Part { text: None }])), None);
        assert_eq!(extract_reply(&response_with_parts(vec![Part::text("   ")])), None);

        let blocked = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("SAFETY".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(extract_reply(&blocked), None);
    }
}
