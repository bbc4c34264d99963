//! Conversation context - Flattens a preamble, history and question into one transcript

use crate::domain::entities::Message;

/// Transcript text assembled for a question.
///
/// The canned dispatcher does not read it; it is built so the wire contract
/// (message plus history) keeps the same shape a model-backed responder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationContext {
    text: String,
}

impl ConversationContext {
    pub fn build(preamble: &str, history: &[Message], message: &str) -> Self {
        let mut text = String::with_capacity(preamble.len() + message.len() + 64);
        text.push_str(preamble);
        text.push_str("\n\n");

        if !history.is_empty() {
            text.push_str("Previous conversation:\n");
            for turn in history {
                text.push_str(&turn.transcript_line());
                text.push('\n');
            }
        }

        text.push_str("\nUser: ");
        text.push_str(message);
        text.push_str("\nAssistant:");

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_history() {
        let ctx = ConversationContext::build("KB", &[], "hi");
        assert_eq!(ctx.as_str(), "KB\n\n\nUser: hi\nAssistant:");
    }

    #[test]
    fn test_with_history() {
        let history = vec![Message::user("q1"), Message::assistant("a1")];
        let ctx = ConversationContext::build("KB", &history, "q2");
        assert_eq!(
            ctx.as_str(),
            "KB\n\nPrevious conversation:\nUser: q1\nAssistant: a1\n\nUser: q2\nAssistant:"
        );
    }
}
