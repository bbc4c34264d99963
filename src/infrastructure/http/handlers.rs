//! HTTP request handlers

use super::assets::{serve_asset, serve_index};
use super::types::{ErrorResponse, ExamplesResponse, HealthResponse};
use super::AppState;
use crate::application::errors::ChatError;
use crate::application::services::{ChatReply, ChatRequest};
use crate::infrastructure::knowledge::EXAMPLE_QUESTIONS;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Message sent to clients for any failed chat request; details stay in the logs
const GENERIC_FAILURE: &str = "Failed to process request";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/assets/*path", get(serve_asset))
        .route("/api/chat", post(chat))
        .route("/api/examples", get(list_examples))
        .route("/health", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Chat
// ============================================================

/// The body is read as raw bytes so a malformed payload gets the JSON error
/// body instead of axum's plain-text rejection.
async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatReply>, ApiError> {
    let request = ChatRequest::from_json(&body)?;
    Ok(Json(state.chat.handle(request)))
}

async fn list_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: EXAMPLE_QUESTIONS.to_vec(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

struct ApiError(ChatError);

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChatError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(status = status.as_u16(), "Chat error: {}", self.0);

        (status, Json(ErrorResponse::new(GENERIC_FAILURE))).into_response()
    }
}
