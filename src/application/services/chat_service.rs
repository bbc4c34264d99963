use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::errors::ChatError;
use crate::application::messaging::ConversationContext;
use crate::domain::entities::{Conversation, Message};
use crate::domain::traits::Responder;
use crate::infrastructure::knowledge;

/// Number of prior turns forwarded to the responder
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Incoming chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: Vec<Message>) -> Self {
        Self {
            message: message.into(),
            history,
        }
    }

    /// Parse a raw JSON body
    pub fn from_json(body: &[u8]) -> Result<Self, ChatError> {
        serde_json::from_slice(body).map_err(|e| ChatError::InvalidRequest(e.to_string()))
    }
}

/// Reply returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// Service for answering chat requests
#[derive(Clone)]
pub struct ChatService {
    responder: Arc<dyn Responder>,
    history_window: usize,
}

impl ChatService {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }

    /// Answer a request
    pub fn handle(&self, request: ChatRequest) -> ChatReply {
        let conversation = Conversation::from(request.history);
        let response = self.answer(&request.message, &conversation);
        ChatReply { response }
    }

    /// Answer `question` given the turns that preceded it
    pub fn answer(&self, question: &str, conversation: &Conversation) -> String {
        let recent = conversation.recent(self.history_window);
        let context = ConversationContext::build(knowledge::PREAMBLE, recent, question);
        tracing::trace!(
            turns = recent.len(),
            context_bytes = context.len(),
            "Built conversation context"
        );

        let response = self.responder.respond(question, recent);
        tracing::info!(
            responder = self.responder.name(),
            question_chars = question.chars().count(),
            history = recent.len(),
            response_chars = response.chars().count(),
            "Answered question"
        );
        response
    }
}
