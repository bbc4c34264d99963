//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Chat request handling
//! - Errors: Layer-specific errors
//! - Messaging: Response dispatching and context building

pub mod errors;
pub mod services;
pub mod messaging;
