//! Gateway runner: converts serenity events to core messages and passes them
//! to the HandlerChain. The ready event caches the bot user id for mention and
//! reply-author checks.

use std::sync::Arc;

use anyhow::{Context as AnyhowContext, Result};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Message as DiscordMessage;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::Client;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

use super::adapters::DiscordMessageWrapper;

/// Forwards gateway events into the handler chain.
pub struct DiscordEventHandler {
    chain: HandlerChain,
    bot_user_id: Arc<tokio::sync::RwLock<Option<u64>>>,
}

impl DiscordEventHandler {
    pub fn new(chain: HandlerChain, bot_user_id: Arc<tokio::sync::RwLock<Option<u64>>>) -> Self {
        Self { chain, bot_user_id }
    }
}

#[async_trait]
impl EventHandler for DiscordEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        *self.bot_user_id.write().await = Some(ready.user.id.get());
        info!(
            bot_user_id = ready.user.id.get(),
            bot_name = %ready.user.name,
            "Bot connected"
        );
    }

    async fn message(&self, ctx: Context, msg: DiscordMessage) {
        let guild_name = msg.guild_id.and_then(|id| id.name(&ctx.cache));
        let channel_name = msg.channel_id.name(&ctx).await.ok();

        let core_msg = DiscordMessageWrapper {
            message: &msg,
            guild_name,
            channel_name,
        }
        .to_core();

        info!(
            author_id = core_msg.author.id,
            channel_id = core_msg.channel.id,
            message_id = core_msg.id,
            "Received message"
        );

        // Run handler chain in a spawned task so the event loop returns immediately
        let chain = self.chain.clone();
        tokio::spawn(async move {
            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, author_id = core_msg.author.id, "Handler chain failed");
            }
        });
    }
}

/// Connects to the Discord gateway and dispatches events until the client stops.
#[instrument(skip(token, chain, bot_user_id))]
pub async fn run_gateway(
    token: &str,
    chain: HandlerChain,
    bot_user_id: Arc<tokio::sync::RwLock<Option<u64>>>,
) -> Result<()> {
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(DiscordEventHandler::new(chain, bot_user_id))
        .await
        .context("Failed to build Discord client")?;

    client.start().await.context("Discord client stopped")?;

    Ok(())
}
