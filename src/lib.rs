//! mc-assistant - keyword-matched Minecraft Q&A served over HTTP and the console

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::messaging::ResponseDispatcher;
pub use application::services::{ChatReply, ChatRequest, ChatService};
pub use domain::entities::{Conversation, Message, Role};
