//! Domain traits - Abstractions for answer sources

pub mod responder;

pub use responder::Responder;
