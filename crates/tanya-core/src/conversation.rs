//! Append-only transcript and per-conversation chat state.

use chrono::Utc;

use crate::types::{Message, Sender};

/// Ordered, append-only sequence of messages for one conversation.
/// Always starts with the agent greeting.
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u32,
}

impl Transcript {
    /// Create a transcript seeded with the greeting message.
    pub fn new(greeting: &str) -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 0,
        };
        transcript.push(Sender::Agent, greeting);
        transcript
    }

    fn push(&mut self, sender: Sender, text: &str) -> Message {
        let message = Message {
            id: format!("msg_{:04}", self.next_id),
            text: text.to_string(),
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn push_user(&mut self, text: &str) -> Message {
        self.push(Sender::User, text)
    }

    pub fn push_agent(&mut self, text: &str) -> Message {
        self.push(Sender::Agent, text)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Everything one open conversation owns: the transcript, the composing
/// flag driving the typing indicator, and the draft text the host UI was
/// composing. Mutated only by the engine task; hosts read snapshots.
pub struct ChatState {
    pub transcript: Transcript,
    pub composing: bool,
    pub draft: String,
}

impl ChatState {
    pub fn new(greeting: &str) -> Self {
        Self {
            transcript: Transcript::new(greeting),
            composing: false,
            draft: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_seeds_greeting() {
        let transcript = Transcript::new("Halo!");
        assert_eq!(transcript.len(), 1);
        let seed = transcript.last().unwrap();
        assert_eq!(seed.sender, Sender::Agent);
        assert_eq!(seed.text, "Halo!");
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut transcript = Transcript::new("hi");
        let a = transcript.push_user("one");
        let b = transcript.push_agent("two");
        assert_eq!(a.id, "msg_0001");
        assert_eq!(b.id, "msg_0002");
    }

    #[test]
    fn test_messages_preserve_insertion_order() {
        let mut transcript = Transcript::new("hi");
        transcript.push_user("first");
        transcript.push_user("second");
        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["hi", "first", "second"]);
    }

    #[test]
    fn test_fresh_chat_state_is_not_composing() {
        let chat = ChatState::new("hi");
        assert!(!chat.composing);
        assert!(chat.draft.is_empty());
    }
}
