//! Converters from serenity types to core types.
//!
//! The gateway handler resolves guild and channel names (cache/HTTP) and
//! passes them in; the wrappers themselves stay pure.

use crate::core::{Channel, ChannelKind, Guild, Message, ToCoreMessage, ToCoreUser, User};

/// Converts a serenity user to core [`User`].
pub struct DiscordUserWrapper<'a>(pub &'a serenity::model::user::User);

impl ToCoreUser for DiscordUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.get(),
            name: self.0.name.clone(),
            is_bot: self.0.bot,
        }
    }
}

/// Converts a serenity message to core [`Message`].
pub struct DiscordMessageWrapper<'a> {
    pub message: &'a serenity::model::channel::Message,
    /// Guild name resolved from the cache; `None` falls back to a placeholder.
    pub guild_name: Option<String>,
    /// Channel name resolved from cache/HTTP.
    pub channel_name: Option<String>,
}

impl ToCoreMessage for DiscordMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let guild = self.message.guild_id.map(|id| Guild {
            id: id.get(),
            name: self
                .guild_name
                .clone()
                .unwrap_or_else(|| "Unknown Server".to_string()),
        });

        let kind = if self.message.guild_id.is_some() {
            ChannelKind::GuildText
        } else {
            ChannelKind::DirectMessage
        };

        Message {
            id: self.message.id.get(),
            author: DiscordUserWrapper(&self.message.author).to_core(),
            channel: Channel {
                id: self.message.channel_id.get(),
                name: self
                    .channel_name
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
                kind,
            },
            guild,
            content: self.message.content.clone(),
            mentions: self.message.mentions.iter().map(|u| u.id.get()).collect(),
            referenced_message_id: self
                .message
                .message_reference
                .as_ref()
                .and_then(|r| r.message_id)
                .map(|id| id.get()),
            created_at: chrono::Utc::now(),
        }
    }
}
