//! Chat session state.
//!
//! The conversation is an explicit value owned by the surface that created
//! it and passed into the turn processor; there is no framework-global
//! message store. The session lives from surface start to surface exit and
//! is mutated only by the turn processor and `clear`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use biochat_core::models::Message;

/// Where the turn loop currently is. `Responding` exists only inside
/// `TurnProcessor::process`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    Idle,
    Responding,
}

/// One user's conversation with the demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub state: TurnState,
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4().to_string(),
            created_at: now,
            last_activity: now,
            state: TurnState::Idle,
            messages: Vec::new(),
        }
    }

    /// Append a message and touch the activity clock.
    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.last_activity = Utc::now();
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Total message count, user and assistant together.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop the whole history, returning how many messages were removed.
    pub fn clear(&mut self) -> usize {
        let dropped = self.messages.len();
        self.messages.clear();
        self.last_activity = Utc::now();
        dropped
    }

    /// Time since the session was created.
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
