//! API response types

use serde::Serialize;

use crate::infrastructure::knowledge::ExampleQuestion;

/// Body returned with any non-2xx status
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Starter questions for the page's picker
#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<ExampleQuestion>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
