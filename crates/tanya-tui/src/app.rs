//! App state — the chat feed as rendered, built from engine events.

use tanya_core::engine::ConversationHandle;
use tanya_core::events::EngineEvent;
use tanya_core::types::{Message, Sender};

/// A message in the chat feed.
#[derive(Clone)]
pub struct ChatLine {
    pub sender: Sender,
    pub text: String,
}

/// The main application state. The transcript view is fed exclusively by
/// engine events, never by polling the engine.
pub struct App {
    pub assistant_name: String,
    pub messages: Vec<ChatLine>,
    pub composing: bool,
    pub input: String,
    pub input_focused: bool,
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub handle: ConversationHandle,
}

impl App {
    pub fn new(assistant_name: String, handle: ConversationHandle, seed: Vec<Message>) -> Self {
        let messages = seed
            .into_iter()
            .map(|m| ChatLine {
                sender: m.sender,
                text: m.text,
            })
            .collect();

        App {
            assistant_name,
            messages,
            composing: false,
            input: String::new(),
            input_focused: true,
            scroll_offset: 0,
            should_quit: false,
            handle,
        }
    }

    /// Handle an engine event.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Message(message) => {
                self.messages.push(ChatLine {
                    sender: message.sender,
                    text: message.text,
                });
                // Auto-scroll to bottom
                self.scroll_offset = 0;
            }
            EngineEvent::Composing(data) => {
                self.composing = data.active;
            }
        }
    }

    /// Submit the current input to the engine. The user message comes back
    /// to the feed as an echoed event, so nothing is pushed locally.
    pub async fn send_message(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.input);
        let _ = self.handle.submit(text).await;
        self.scroll_offset = 0;
    }

    /// Mirror the input bar into the engine's draft buffer.
    pub async fn sync_draft(&self) {
        self.handle.set_draft(self.input.clone()).await;
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}
