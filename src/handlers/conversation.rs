//! Conversation handler: routes eligible guild messages to the response
//! generator and threads the replies.
//!
//! A message either starts a new conversation (`/chat` command or @-mention)
//! or continues one (reply to a bot-authored message). Both paths persist the
//! exchange and answer in-channel; failures surface as a single apology reply.
//!
//! **External interactions:** [`ChatClient`] (reply, fetch referenced message),
//! [`ServerRegistry`] (guild lookup/registration), [`MessageRepository`]
//! (records + history), [`ResponseGenerator`] (reply text).

use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::core::{ChatClient, Guild, Handler, HandlerResponse, Message, Result};
use crate::llm::{ChannelContext, ResponseGenerator};
use crate::mention;
use crate::servers::{Server, ServerRegistry};
use crate::storage::MessageRepository;

// --- User-facing fallback messages ---
const MSG_EMPTY_PROMPT: &str =
    "Please provide a message after mentioning me or using the /chat command.";
const MSG_REQUEST_FAILED: &str =
    "I'm sorry, but I encountered an error while processing your request.";
const MSG_REPLY_FAILED: &str =
    "I'm sorry, but I encountered an error while processing your reply.";

/// Routes whitelisted guild messages through the response generator.
#[derive(Clone)]
pub struct ConversationHandler {
    /// Bot user id, populated by the gateway `ready` event.
    bot_user_id: Arc<tokio::sync::RwLock<Option<u64>>>,
    client: Arc<dyn ChatClient>,
    registry: Arc<dyn ServerRegistry>,
    repo: MessageRepository,
    generator: Arc<dyn ResponseGenerator>,
    /// Timezone reported in the channel context (config BOT_TIMEZONE).
    timezone: String,
}

impl ConversationHandler {
    pub fn new(
        bot_user_id: Arc<tokio::sync::RwLock<Option<u64>>>,
        client: Arc<dyn ChatClient>,
        registry: Arc<dyn ServerRegistry>,
        repo: MessageRepository,
        generator: Arc<dyn ResponseGenerator>,
        timezone: String,
    ) -> Self {
        Self {
            bot_user_id,
            client,
            registry,
            repo,
            generator,
            timezone,
        }
    }

    async fn get_bot_user_id(&self) -> Option<u64> {
        *self.bot_user_id.read().await
    }

    /// Logs an error and its cause chain. First item with `first_msg`, rest with "Caused by".
    fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
        for (i, cause) in e.chain().enumerate() {
            if i == 0 {
                error!(cause = %cause, "{}", first_msg);
            } else {
                error!(cause = %cause, "Caused by");
            }
        }
    }

    /// Sends a fallback reply (best effort) and stops the chain.
    async fn send_fallback_and_stop(
        &self,
        message: &Message,
        text: &str,
    ) -> Result<HandlerResponse> {
        if let Err(e) = self.client.reply_to(message, text).await {
            error!(error = %e, "Failed to send fallback reply");
        }
        Ok(HandlerResponse::Stop)
    }

    fn channel_context(&self, message: &Message, guild: &Guild, server: &Server) -> ChannelContext {
        ChannelContext {
            channel_name: message.channel.name.clone(),
            server_name: guild.name.clone(),
            server_context: server.server_context.clone(),
            sender_name: message.author.name.clone(),
            timestamp: Utc::now(),
            timezone: self.timezone.clone(),
        }
    }

    /// New-conversation path: persist the prompt, generate, reply, persist the response.
    async fn process_new_conversation(
        &self,
        message: &Message,
        guild: &Guild,
        server: &Server,
        prompt: &str,
    ) -> anyhow::Result<HandlerResponse> {
        let record = self
            .repo
            .record_user_message(
                server.id,
                message.author.id,
                &message.author.name,
                message.id,
                prompt,
                message.channel.id,
                None,
            )
            .await
            .context("Failed to persist user message")?;

        let context = self.channel_context(message, guild, server);
        let response = self
            .generator
            .generate(std::slice::from_ref(&record), &context)
            .await
            .context("Failed to generate response")?;

        let bot_message_id = self
            .client
            .reply_to(message, &response)
            .await
            .context("Failed to send response")?;

        self.repo
            .record_ai_response(server.id, bot_message_id, &response, message.id)
            .await
            .context("Failed to persist AI response")?;

        info!(
            author_id = message.author.id,
            bot_message_id = bot_message_id,
            "Conversation started"
        );
        Ok(HandlerResponse::Reply(response))
    }

    /// Reply path: only continues conversations threaded on a bot message.
    async fn process_reply(
        &self,
        message: &Message,
        guild: &Guild,
        server: &Server,
        referenced_message_id: u64,
    ) -> anyhow::Result<HandlerResponse> {
        let referenced = self
            .client
            .fetch_message(message.channel.id, referenced_message_id)
            .await
            .context("Failed to fetch referenced message")?;

        let bot_user_id = self.get_bot_user_id().await;
        if bot_user_id != Some(referenced.author.id) {
            info!(
                author_id = message.author.id,
                referenced_author_id = referenced.author.id,
                "Reply does not target a bot message, ignoring"
            );
            return Ok(HandlerResponse::Continue);
        }

        let mut history = self
            .repo
            .conversation_history(referenced_message_id)
            .await
            .context("Failed to load conversation history")?;

        let record = self
            .repo
            .record_user_message(
                server.id,
                message.author.id,
                &message.author.name,
                message.id,
                &message.content,
                message.channel.id,
                Some(referenced_message_id),
            )
            .await
            .context("Failed to persist user message")?;
        history.push(record);

        let context = self.channel_context(message, guild, server);
        let response = self
            .generator
            .generate(&history, &context)
            .await
            .context("Failed to generate response")?;

        let bot_message_id = self
            .client
            .reply_to(message, &response)
            .await
            .context("Failed to send response")?;

        self.repo
            .record_ai_response(server.id, bot_message_id, &response, message.id)
            .await
            .context("Failed to persist AI response")?;

        info!(
            author_id = message.author.id,
            history_len = history.len(),
            bot_message_id = bot_message_id,
            "Conversation continued"
        );
        Ok(HandlerResponse::Reply(response))
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(guild) = message.guild.as_ref() else {
            return Ok(HandlerResponse::Continue);
        };

        let server = match self.registry.get_server(guild.id).await? {
            Some(server) => server,
            None => {
                warn!(
                    guild_id = guild.id,
                    guild_name = %guild.name,
                    "Server not registered, adding it for future messages"
                );
                self.registry.add_server(guild.id, &guild.name).await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        if !server.is_channel_whitelisted(message.channel.id) {
            info!(
                guild_id = guild.id,
                channel_id = message.channel.id,
                "Channel not whitelisted, ignoring message"
            );
            return Ok(HandlerResponse::Stop);
        }

        if let Some(referenced_message_id) = message.referenced_message_id {
            info!(
                author_id = message.author.id,
                referenced_message_id = referenced_message_id,
                "Processing reply"
            );
            return match self
                .process_reply(message, guild, &server, referenced_message_id)
                .await
            {
                Ok(response) => Ok(response),
                Err(e) => {
                    Self::log_error_chain(&e, "Error handling reply");
                    self.send_fallback_and_stop(message, MSG_REPLY_FAILED).await
                }
            };
        }

        let bot_user_id = self.get_bot_user_id().await;
        if let Some(prompt) = mention::get_prompt(message, bot_user_id) {
            if prompt.is_empty() {
                info!(author_id = message.author.id, "Empty prompt, asking for input");
                return self.send_fallback_and_stop(message, MSG_EMPTY_PROMPT).await;
            }
            info!(
                author_id = message.author.id,
                prompt = %prompt,
                "Processing new conversation"
            );
            return match self
                .process_new_conversation(message, guild, &server, &prompt)
                .await
            {
                Ok(response) => Ok(response),
                Err(e) => {
                    Self::log_error_chain(&e, "Error generating response");
                    self.send_fallback_and_stop(message, MSG_REQUEST_FAILED)
                        .await
                }
            };
        }

        Ok(HandlerResponse::Continue)
    }
}
