// Handlers module

pub mod chat;

pub use chat::chat_handler;
