use crate::domain::entities::Message;

/// Responder trait - anything that can answer a question in a conversation
pub trait Responder: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Produce exactly one reply. Never fails.
    fn respond(&self, question: &str, history: &[Message]) -> String;
}
