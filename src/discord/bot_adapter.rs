//! Implements [`crate::core::ChatClient`] over the Discord HTTP API.
//! Production code replies and fetches via serenity; tests substitute another impl.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::channel::MessageReference;
use serenity::model::id::{ChannelId, MessageId};

use crate::core::{BotError, ChatClient, Message, Result, ToCoreMessage};

use super::adapters::DiscordMessageWrapper;

/// serenity-backed [`ChatClient`].
#[derive(Clone)]
pub struct DiscordChatClient {
    http: Arc<Http>,
}

impl DiscordChatClient {
    /// Creates a standalone HTTP client from the bot token.
    pub fn new(token: &str) -> Self {
        Self {
            http: Arc::new(Http::new(token)),
        }
    }
}

#[async_trait]
impl ChatClient for DiscordChatClient {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<u64> {
        let channel_id = ChannelId::new(message.channel.id);
        let reference = MessageReference::from((channel_id, MessageId::new(message.id)));
        let builder = CreateMessage::new().content(text).reference_message(reference);

        let sent = channel_id
            .send_message(&self.http, builder)
            .await
            .map_err(|e| BotError::Discord(e.to_string()))?;
        Ok(sent.id.get())
    }

    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<Message> {
        let fetched = self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
            .map_err(|e| BotError::Discord(e.to_string()))?;

        Ok(DiscordMessageWrapper {
            message: &fetched,
            guild_name: None,
            channel_name: None,
        }
        .to_core())
    }
}
