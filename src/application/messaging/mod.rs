//! Message handling - Question dispatch and transcript building

pub mod context;
pub mod dispatcher;

pub use context::ConversationContext;
pub use dispatcher::{ResponseDispatcher, Selection};
