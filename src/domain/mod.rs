//! Domain layer - Core chat concepts with no transport concerns
//! 
//! This layer contains:
//! - Entities: Core objects (Message, Conversation, ResponseRule)
//! - Traits: Abstractions the application layer depends on (Responder)

pub mod entities;
pub mod traits;
