//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{channel::Channel, guild::Guild, user::User};

/// A single inbound message with author, channel, guild, and reply metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub author: User,
    pub channel: Channel,
    /// Guild the message was posted in; `None` for DMs.
    pub guild: Option<Guild>,
    pub content: String,
    /// User ids mentioned in the message body; used to detect bot @-mentions.
    pub mentions: Vec<u64>,
    /// Id of the message this one replies to, when the platform carries a reference.
    pub referenced_message_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}
