//! Selection and translation of caller turns

use crate::config::HistoryMode;
use crate::error::{RelayError, EMPTY_CONTENT, NO_MESSAGES};
use crate::llm::gemini::mapper::{to_gemini_content, USER_ROLE};
use crate::llm::gemini::types::Content;
use crate::models::ChatTurn;

impl HistoryMode {
    /// Translate the caller's turns into upstream contents, in order
    pub fn translate(self, mut turns: Vec<ChatTurn>) -> Result<Vec<Content>, RelayError> {
        match self {
            HistoryMode::Full => Ok(turns.into_iter().map(to_gemini_content).collect()),
            HistoryMode::Last => {
                let last = turns.pop().ok_or(RelayError::InvalidInput(NO_MESSAGES))?;
                let text = last.content.trim();
                if text.is_empty() {
                    return Err(RelayError::InvalidInput(EMPTY_CONTENT));
                }
                Ok(vec![Content::text(USER_ROLE, text)])
            }
        }
    }
}
