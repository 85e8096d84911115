//! Core types — Sender, Message, ComposingData.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Message sender ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Agent => write!(f, "agent"),
        }
    }
}

// ── Message ──

/// One exchanged utterance. Once appended to a transcript it is never
/// mutated or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

// ── Composing state (typing indicator) ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposingData {
    pub active: bool,
}
