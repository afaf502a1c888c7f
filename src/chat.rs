//! Chat panel model: message list and the scripted auto-reply.
//!
//! The chat is a collaborator of the drawing core, not part of it; it shares
//! no state with the action log. The 1.5 s reply delay is the host's timer;
//! this model only appends the reply when asked.

use crate::presence::Roster;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Canned reply the simulated collaborators send.
const SCRIPTED_REPLY: &str = "That's a great point!";

/// One chat message with its sender's display attributes denormalized in,
/// so the panel renders without a roster lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Millisecond timestamp rendered as a decimal string
    pub id: String,
    /// Sender's participant id
    pub user_id: String,
    /// Sender's display name at send time
    pub user_name: String,
    /// Sender's avatar color at send time
    pub user_color: String,
    /// Message body
    pub body: String,
    /// Send time in Unix milliseconds
    pub timestamp_ms: i64,
}

/// Ordered, append-only message list.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    last_id_ms: i64,
}

impl ChatLog {
    /// Creates an empty chat log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message from the local user.
    ///
    /// Whitespace-only input is rejected as a no-op; the body is trimmed
    /// before appending. Returns the appended message, if any.
    pub fn post(&mut self, roster: &Roster, body: &str) -> Option<&ChatMessage> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        let message = self.build_message(&roster.local.id, &roster.local.name, &roster.local.color, body);
        self.messages.push(message);
        self.messages.last()
    }

    /// Appends the scripted reply from a random remote collaborator.
    ///
    /// Returns `None` when the roster has no remotes to speak for.
    pub fn scripted_reply<R: Rng + ?Sized>(
        &mut self,
        roster: &Roster,
        rng: &mut R,
    ) -> Option<&ChatMessage> {
        if roster.remotes.is_empty() {
            return None;
        }
        let sender = &roster.remotes[rng.random_range(0..roster.remotes.len())];

        let message = self.build_message(&sender.id, &sender.name, &sender.color, SCRIPTED_REPLY);
        self.messages.push(message);
        self.messages.last()
    }

    /// Messages in send order, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn build_message(&mut self, user_id: &str, name: &str, color: &str, body: &str) -> ChatMessage {
        let now = Utc::now().timestamp_millis();
        self.last_id_ms = now.max(self.last_id_ms + 1);
        ChatMessage {
            id: self.last_id_ms.to_string(),
            user_id: user_id.to_string(),
            user_name: name.to_string(),
            user_color: color.to_string(),
            body: body.to_string(),
            timestamp_ms: now,
        }
    }
}
