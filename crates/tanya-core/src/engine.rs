//! The conversation engine — turns user utterances into canned agent
//! replies, with a simulated composing delay in between.
//!
//! The engine runs as an independent tokio task consuming a command queue.
//! Commands are processed strictly in order, which gives the two transcript
//! guarantees for free: overlapping submissions produce replies in FIFO
//! order, and every user message is followed by its agent reply before the
//! next user message is appended.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, RwLock};
use tracing::info;

use crate::config::EngineConfig;
use crate::conversation::ChatState;
use crate::events::EngineEvent;
use crate::rules;
use crate::types::{ComposingData, Message};

/// Commands that can be sent TO the engine (from TUI/Web hosts).
#[derive(Debug)]
pub enum EngineCommand {
    Submit(String),
    Stop,
}

/// The engine itself is total — every utterance yields a defined reply.
/// The only host-facing failure is talking to an engine whose task has
/// already stopped.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("conversation engine has stopped")]
    Stopped,
}

/// Cloneable host-facing handle: submit utterances, snapshot state,
/// subscribe to events.
#[derive(Clone)]
pub struct ConversationHandle {
    chat: Arc<RwLock<ChatState>>,
    command_tx: mpsc::Sender<EngineCommand>,
    event_tx: broadcast::Sender<EngineEvent>,
}

impl ConversationHandle {
    /// Enqueue a user utterance. Blank input is accepted here and silently
    /// dropped by the engine — a validation policy, not an error.
    pub async fn submit(&self, utterance: impl Into<String>) -> Result<(), EngineError> {
        self.command_tx
            .send(EngineCommand::Submit(utterance.into()))
            .await
            .map_err(|_| EngineError::Stopped)
    }

    /// Ask the engine task to shut down after draining queued commands.
    pub async fn stop(&self) -> Result<(), EngineError> {
        self.command_tx
            .send(EngineCommand::Stop)
            .await
            .map_err(|_| EngineError::Stopped)
    }

    /// Read-only snapshot of the transcript for rendering.
    pub async fn transcript(&self) -> Vec<Message> {
        self.chat.read().await.transcript.messages().to_vec()
    }

    /// Whether a reply is pending (drives the typing indicator).
    pub async fn is_composing(&self) -> bool {
        self.chat.read().await.composing
    }

    /// Mirror the text the host is currently composing. Cleared by the
    /// engine when the utterance is submitted.
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.chat.write().await.draft = text.into();
    }

    pub async fn draft(&self) -> String {
        self.chat.read().await.draft.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }
}

/// The engine — one instance per open conversation, run as a tokio task.
pub struct ConversationEngine {
    chat: Arc<RwLock<ChatState>>,
    config: EngineConfig,
    event_tx: broadcast::Sender<EngineEvent>,
    command_tx: mpsc::Sender<EngineCommand>,
    command_rx: mpsc::Receiver<EngineCommand>,
}

impl ConversationEngine {
    /// Create an engine with a freshly seeded transcript (the greeting).
    pub fn new(config: EngineConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_capacity);
        let (command_tx, command_rx) = mpsc::channel(32);
        let chat = Arc::new(RwLock::new(ChatState::new(&config.greeting)));

        Self {
            chat,
            config,
            event_tx,
            command_tx,
            command_rx,
        }
    }

    pub fn handle(&self) -> ConversationHandle {
        ConversationHandle {
            chat: Arc::clone(&self.chat),
            command_tx: self.command_tx.clone(),
            event_tx: self.event_tx.clone(),
        }
    }

    fn broadcast(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Command loop. Consumes the engine; spawn with `tokio::spawn(engine.run())`.
    pub async fn run(mut self) {
        info!("conversation engine started ({})", self.config.assistant_name);
        while let Some(command) = self.command_rx.recv().await {
            match command {
                EngineCommand::Submit(text) => self.handle_submit(&text).await,
                EngineCommand::Stop => break,
            }
        }
        info!("conversation engine stopped");
    }

    async fn handle_submit(&self, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            // Whitespace-only input is ignored, not an error
            return;
        }

        let user_message = {
            let mut chat = self.chat.write().await;
            chat.draft.clear();
            chat.composing = true;
            chat.transcript.push_user(text)
        };
        info!("[user] {}", truncate(&user_message.text));
        self.broadcast(EngineEvent::Message(user_message));
        self.broadcast(EngineEvent::Composing(ComposingData { active: true }));

        // Simulated thinking time before the reply lands
        tokio::time::sleep(self.config.composing_delay()).await;

        let rule = rules::match_rule(text);
        let reply = rule.map(|r| r.reply).unwrap_or(rules::FALLBACK_REPLY);
        let agent_message = {
            let mut chat = self.chat.write().await;
            let message = chat.transcript.push_agent(reply);
            chat.composing = false;
            message
        };
        info!(
            "[agent:{}] {}",
            rule.map(|r| r.topic).unwrap_or("fallback"),
            truncate(&agent_message.text)
        );
        self.broadcast(EngineEvent::Message(agent_message));
        self.broadcast(EngineEvent::Composing(ComposingData { active: false }));
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(120).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;
    use std::time::Duration;

    fn spawn_engine() -> ConversationHandle {
        let engine = ConversationEngine::new(EngineConfig::default());
        let handle = engine.handle();
        tokio::spawn(engine.run());
        handle
    }

    #[tokio::test(start_paused = true)]
    async fn test_transcript_starts_with_greeting() {
        let handle = spawn_engine();
        let transcript = handle.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].sender, Sender::Agent);
        assert!(!handle.is_composing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_a_no_op() {
        let handle = spawn_engine();
        handle.submit("").await.unwrap();
        handle.submit("   ").await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(handle.transcript().await.len(), 1);
        assert!(!handle.is_composing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_order_and_composing_transition() {
        let handle = spawn_engine();
        handle.submit("proyek apa saja?").await.unwrap();

        // Before the delay elapses: user message appended, typing indicator on
        tokio::time::sleep(Duration::from_millis(100)).await;
        let transcript = handle.transcript().await;
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].sender, Sender::User);
        assert_eq!(transcript[1].text, "proyek apa saja?");
        assert!(handle.is_composing().await);

        // After the delay: exactly one agent reply, indicator off
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let transcript = handle.transcript().await;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].sender, Sender::Agent);
        assert_eq!(transcript[2].text, rules::reply_for("proyek apa saja?"));
        assert!(!handle.is_composing().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submits_reply_in_fifo_order() {
        let handle = spawn_engine();
        handle.submit("kontak?").await.unwrap();
        handle.submit("sekolah?").await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        let transcript = handle.transcript().await;
        assert_eq!(transcript.len(), 5);
        // Strict turn-taking: greeting, user, reply, user, reply
        assert_eq!(transcript[1].text, "kontak?");
        assert_eq!(transcript[2].text, rules::reply_for("kontak?"));
        assert_eq!(transcript[3].text, "sekolah?");
        assert_eq!(transcript[4].text, rules::reply_for("sekolah?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_trims_and_clears_draft() {
        let handle = spawn_engine();
        handle.set_draft("  skill?  ").await;
        handle.submit("  skill?  ").await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(handle.draft().await, "");
        let transcript = handle.transcript().await;
        assert_eq!(transcript[1].text, "skill?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_broadcast_in_order() {
        let handle = spawn_engine();
        let mut rx = handle.subscribe();
        handle.submit("skill?").await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], EngineEvent::Message(m) if m.sender == Sender::User));
        assert!(matches!(&events[1], EngineEvent::Composing(c) if c.active));
        assert!(matches!(&events[2], EngineEvent::Message(m) if m.sender == Sender::Agent));
        assert!(matches!(&events[3], EngineEvent::Composing(c) if !c.active));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_after_stop_errors() {
        let handle = spawn_engine();
        handle.stop().await.unwrap();
        // Let the engine task drain and drop its receiver
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(matches!(
            handle.submit("halo").await,
            Err(EngineError::Stopped)
        ));
    }
}
