//! REST API endpoints — transcript snapshot, status, message submission.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/transcript", get(get_transcript))
        .route("/api/status", get(get_status))
        .route("/api/message", post(post_message))
}

// --- Transcript ---

async fn get_transcript(State(state): State<Arc<AppState>>) -> Json<Value> {
    let transcript = state.handle.transcript().await;
    Json(json!(transcript))
}

// --- Status ---

async fn get_status(State(state): State<Arc<AppState>>) -> Json<Value> {
    let composing = state.handle.is_composing().await;
    let message_count = state.handle.transcript().await.len();
    Json(json!({
        "assistant_name": state.assistant_name,
        "composing": composing,
        "message_count": message_count,
    }))
}

// --- Submit a user message ---

#[derive(Deserialize)]
struct MessageBody {
    text: Option<String>,
}

async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MessageBody>,
) -> Json<Value> {
    let text = body.text.unwrap_or_default();

    match state.handle.submit(text).await {
        Ok(()) => Json(json!({"ok": true})),
        Err(e) => {
            info!("Message rejected: {}", e);
            Json(json!({"ok": false, "error": e.to_string()}))
        }
    }
}
