//! Channel identity for the core model.

use serde::{Deserialize, Serialize};

/// Kind of channel a message arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    GuildText,
    DirectMessage,
}

/// Channel a message was posted in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
}
