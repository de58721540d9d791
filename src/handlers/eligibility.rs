//! Handler that filters out messages the bot must never process: bot authors,
//! DMs, and messages without a guild.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::{ChannelKind, Handler, Message, Result};

/// Stops the chain in `before()` for bot-authored messages, DMs, and
/// guildless messages; everything else continues.
#[derive(Clone, Default)]
pub struct EligibilityHandler;

impl EligibilityHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for EligibilityHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if message.author.is_bot {
            debug!(author_id = message.author.id, "Skipping bot-authored message");
            return Ok(false);
        }
        if message.channel.kind == ChannelKind::DirectMessage {
            debug!(author_id = message.author.id, "Skipping direct message");
            return Ok(false);
        }
        if message.guild.is_none() {
            debug!(author_id = message.author.id, "Skipping message without guild");
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Channel, Guild, User};
    use chrono::Utc;

    fn message(is_bot: bool, kind: ChannelKind, guild: Option<Guild>) -> Message {
        Message {
            id: 1,
            author: User {
                id: 42,
                name: "alice".to_string(),
                is_bot,
            },
            channel: Channel {
                id: 7,
                name: "general".to_string(),
                kind,
            },
            guild,
            content: "hello".to_string(),
            mentions: vec![],
            referenced_message_id: None,
            created_at: Utc::now(),
        }
    }

    fn guild() -> Option<Guild> {
        Some(Guild {
            id: 99,
            name: "Test".to_string(),
        })
    }

    #[tokio::test]
    async fn test_bot_author_stops_chain() {
        let handler = EligibilityHandler::new();
        let msg = message(true, ChannelKind::GuildText, guild());
        assert!(!handler.before(&msg).await.unwrap());
    }

    #[tokio::test]
    async fn test_direct_message_stops_chain() {
        let handler = EligibilityHandler::new();
        let msg = message(false, ChannelKind::DirectMessage, None);
        assert!(!handler.before(&msg).await.unwrap());
    }

    #[tokio::test]
    async fn test_guildless_message_stops_chain() {
        let handler = EligibilityHandler::new();
        let msg = message(false, ChannelKind::GuildText, None);
        assert!(!handler.before(&msg).await.unwrap());
    }

    #[tokio::test]
    async fn test_guild_message_continues() {
        let handler = EligibilityHandler::new();
        let msg = message(false, ChannelKind::GuildText, guild());
        assert!(handler.before(&msg).await.unwrap());
    }
}
