//! HTTP API - chat endpoint and the embedded chat page

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;
pub use types::{ErrorResponse, ExamplesResponse, HealthResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::errors::AppError;
use crate::application::messaging::ResponseDispatcher;
use crate::application::services::ChatService;
use crate::infrastructure::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self { chat }
    }

    /// State backed by the built-in knowledge base
    pub fn from_config(config: &Config) -> Self {
        let chat = ChatService::new(Arc::new(ResponseDispatcher::minecraft()))
            .with_history_window(config.chat.history_window);
        Self::new(chat)
    }
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), AppError> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
