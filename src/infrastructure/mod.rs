//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Knowledge: The built-in rule table and canned answers
//! - Http: The chat endpoint and embedded page
//! - Adapters: Console front-end

pub mod config;
pub mod knowledge;
pub mod http;
pub mod adapters;
