//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction value for user messages.
pub const DIRECTION_RECEIVED: &str = "received";
/// Direction value for AI responses sent by the bot.
pub const DIRECTION_SENT: &str = "sent";

/// One row from the messages table; used for save and query results.
///
/// The primary key is the platform message id, so reply references stored in
/// `reply_to_message_id` can be resolved against incoming Discord references.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    /// Platform message id (primary key).
    pub id: String,
    /// Guild the message belongs to.
    pub server_id: i64,
    /// Author id; `None` for AI responses.
    pub user_id: Option<i64>,
    /// Author username; `None` for AI responses.
    pub username: Option<String>,
    /// Channel the message was posted in; `None` for AI responses.
    pub channel_id: Option<i64>,
    /// Message body (for user messages, the prompt after prefix stripping).
    pub content: String,
    /// "received" (user) or "sent" (AI response).
    pub direction: String,
    /// Id of the message this one replies to, if any.
    pub reply_to_message_id: Option<String>,
    /// When the message was stored.
    pub created_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Creates a record for an incoming user message.
    pub fn received(
        server_id: u64,
        user_id: u64,
        username: &str,
        message_id: u64,
        content: &str,
        channel_id: u64,
        reply_to_message_id: Option<u64>,
    ) -> Self {
        Self {
            id: message_id.to_string(),
            server_id: server_id as i64,
            user_id: Some(user_id as i64),
            username: Some(username.to_string()),
            channel_id: Some(channel_id as i64),
            content: content.to_string(),
            direction: DIRECTION_RECEIVED.to_string(),
            reply_to_message_id: reply_to_message_id.map(|id| id.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Creates a record for an AI response, linked to the user message it answers.
    pub fn sent(
        server_id: u64,
        bot_message_id: u64,
        content: &str,
        user_message_id: u64,
    ) -> Self {
        Self {
            id: bot_message_id.to_string(),
            server_id: server_id as i64,
            user_id: None,
            username: None,
            channel_id: None,
            content: content.to_string(),
            direction: DIRECTION_SENT.to_string(),
            reply_to_message_id: Some(user_message_id.to_string()),
            created_at: Utc::now(),
        }
    }

    /// Whether this record is an AI response.
    pub fn is_from_bot(&self) -> bool {
        self.direction == DIRECTION_SENT
    }
}
