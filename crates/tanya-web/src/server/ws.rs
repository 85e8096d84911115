//! WebSocket — the chat widget's transport. Replays the transcript on
//! connect, then streams engine events; incoming text frames are user
//! utterances.

use std::sync::Arc;

use axum::{
    extract::{ws::WebSocket, State, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::{error, info};

use tanya_core::events::EngineEvent;
use tanya_core::types::ComposingData;

use super::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/ws", get(ws_handler))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    // Subscribe before snapshotting so no event falls between the two
    let mut rx = state.handle.subscribe();

    info!("WebSocket client connected");

    // Replay the transcript so a fresh widget shows the whole conversation
    let transcript = state.handle.transcript().await;
    let composing = state.handle.is_composing().await;
    for message in transcript {
        if send_event(&mut socket, &EngineEvent::Message(message)).await.is_err() {
            return;
        }
    }
    if composing {
        let event = EngineEvent::Composing(ComposingData { active: true });
        if send_event(&mut socket, &event).await.is_err() {
            return;
        }
    }

    loop {
        tokio::select! {
            // Engine events -> client
            result = rx.recv() => {
                match result {
                    Ok(event) => {
                        if send_event(&mut socket, &event).await.is_err() {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        info!("WebSocket lagged {} events", n);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        break;
                    }
                }
            }
            // Client frames: text is a user utterance, anything else is keep-alive
            msg = socket.recv() => {
                match msg {
                    Some(Ok(axum::extract::ws::Message::Text(text))) => {
                        if state.handle.submit(text.to_string()).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {} // keep-alive, ignore content
                    _ => break,       // disconnected or error
                }
            }
        }
    }

    info!("WebSocket client disconnected");
}

async fn send_event(socket: &mut WebSocket, event: &EngineEvent) -> Result<(), ()> {
    match serde_json::to_string(&event.to_ws_json()) {
        Ok(json) => socket
            .send(axum::extract::ws::Message::Text(json.into()))
            .await
            .map_err(|_| ()),
        Err(e) => {
            error!("Failed to serialize event: {}", e);
            Ok(())
        }
    }
}
