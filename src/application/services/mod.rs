//! Application services - Business logic orchestration

pub mod chat_service;

pub use chat_service::{ChatReply, ChatRequest, ChatService, DEFAULT_HISTORY_WINDOW};
