//! Gemini provider implementation
//!
//! This module provides a client for the `generateContent` endpoint of the
//! Generative Language API, implementing the ContentGenerator trait.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
