// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Relay core
pub mod config;
pub mod error;
pub mod relay;

// Upstream client
pub mod llm;
