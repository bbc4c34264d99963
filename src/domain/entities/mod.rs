//! Domain entities - Core chat objects with no external dependencies

pub mod message;
pub mod conversation;
pub mod rule;

pub use message::{Message, Role};
pub use conversation::Conversation;
pub use rule::{Clause, ResponseRule, RuleTable};
