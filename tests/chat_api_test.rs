//! HTTP API integration tests
//! Run with: cargo test --test chat_api_test

use std::sync::Once;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use mc_assistant::infrastructure::config::Config;
use mc_assistant::infrastructure::http::{create_router, AppState};
use mc_assistant::infrastructure::knowledge::FALLBACK;
use serde_json::{json, Value};
use tower::ServiceExt;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn app() -> Router {
    ensure_init();
    create_router(AppState::from_config(&Config::default()))
}

async fn post_chat(body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

#[tokio::test]
async fn test_chat_returns_response() {
    let body = json!({
        "message": "How do I craft a diamond pickaxe?",
        "history": []
    });
    let (status, value) = post_chat(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let text = value["response"].as_str().unwrap();
    assert!(text.contains("3 Diamonds"));
    assert!(value.get("error").is_none());
}

#[tokio::test]
async fn test_chat_ignores_history_for_selection() {
    let history: Vec<Value> = (0..10)
        .map(|i| json!({
            "role": if i % 2 == 0 { "user" } else { "assistant" },
            "content": "tell me about the wither"
        }))
        .collect();
    let body = json!({ "message": "hello there", "history": history });
    let (status, value) = post_chat(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["response"], FALLBACK);
}

#[tokio::test]
async fn test_chat_without_history_field() {
    let (status, value) = post_chat(r#"{"message":"dragon"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(value["response"].as_str().unwrap().contains("End Crystals"));
}

#[tokio::test]
async fn test_chat_empty_message_falls_back() {
    let (status, value) = post_chat(r#"{"message":"","history":[]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["response"], FALLBACK);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, value) = post_chat("{\"message\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({ "error": "Failed to process request" }));
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let body = json!({
        "message": "hi",
        "history": [{ "role": "system", "content": "x" }]
    });
    let (status, value) = post_chat(body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn test_examples_endpoint() {
    let (status, _, bytes) = get("/api/examples").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&bytes).unwrap();
    let examples = value["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 4);
    assert_eq!(examples[0]["question"], "How do I craft a diamond pickaxe?");
    assert_eq!(examples[3]["description"], "Latest updates");
}

#[tokio::test]
async fn test_index_page_is_served() {
    let (status, content_type, bytes) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(String::from_utf8(bytes).unwrap().contains("Minecraft AI Agent"));
}

#[tokio::test]
async fn test_assets_are_served() {
    let (status, content_type, _) = get("/assets/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));

    let (status, _, _) = get("/assets/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_version() {
    let (status, _, bytes) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), json!({ "status": "ok" }));

    let (status, _, bytes) = get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), env!("CARGO_PKG_VERSION"));
}
