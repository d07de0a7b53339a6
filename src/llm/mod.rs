//! LLM layer
//!
//! Client for the Google Generative Language API and the trait the relay
//! uses to reach it.

pub mod core;
pub mod gemini;

pub use self::core::{
    error::LlmError,
    provider::{create_provider, ContentGenerator},
};
pub use gemini::GeminiClient;
