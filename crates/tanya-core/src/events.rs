//! EngineEvent enum — broadcast from the engine to TUI/Web frontends via
//! tokio::broadcast.

use serde::{Deserialize, Serialize};

use crate::types::{ComposingData, Message};

/// Events broadcast from an engine task to all subscribers (TUI, WebSocket
/// clients).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum EngineEvent {
    /// A message was appended to the transcript (user or agent).
    #[serde(rename = "message")]
    Message(Message),

    /// The composing flag changed (typing indicator on/off).
    #[serde(rename = "composing")]
    Composing(ComposingData),
}

impl EngineEvent {
    /// Serialize to the JSON format the chat widget expects:
    /// `{"event": "...", "data": {...}}`
    pub fn to_ws_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
