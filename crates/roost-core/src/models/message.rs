//! Chat message model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::user::{User, UserId};
use crate::util::truncate_with_ellipsis;

const REPLY_EXCERPT_CHARS: usize = 80;

/// A unique identifier for a message, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Create a new unique message ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A chat message, owned by the conversation state and rendered read-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: User,
    pub text: String,
    /// Send timestamp (Unix ms)
    pub sent_at: i64,
    /// Whether the recipient has seen the message
    pub read: bool,
}

impl Message {
    /// Create an unread message sent now
    #[must_use]
    pub fn new(sender: User, text: impl Into<String>) -> Self {
        Self::at(sender, text, chrono::Utc::now().timestamp_millis())
    }

    /// Create an unread message with an explicit timestamp
    #[must_use]
    pub fn at(sender: User, text: impl Into<String>, sent_at: i64) -> Self {
        Self {
            id: MessageId::new(),
            sender,
            text: text.into(),
            sent_at,
            read: false,
        }
    }

    #[must_use]
    pub fn is_from(&self, user_id: &UserId) -> bool {
        &self.sender.id == user_id
    }
}

/// The message a draft is replying to, shown above the composer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyContext {
    pub message_id: MessageId,
    pub sender_name: String,
    pub excerpt: String,
}

impl ReplyContext {
    #[must_use]
    pub fn from_message(message: &Message) -> Self {
        Self {
            message_id: message.id,
            sender_name: message.sender.display_name.clone(),
            excerpt: truncate_with_ellipsis(&message.text, REPLY_EXCERPT_CHARS),
        }
    }
}
