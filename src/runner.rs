//! Component wiring and bot entry point.
//!
//! Builds the repository, registry, generator, and chat client from config,
//! assembles the handler chain, and starts the Discord gateway.

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{init_tracing, ChatClient};
use crate::discord::{run_gateway, DiscordChatClient};
use crate::handlers::{ConversationHandler, EligibilityHandler};
use crate::llm::{OpenAIGenerator, ResponseGenerator};
use crate::servers::{ServerRegistry, SqliteServerRegistry};
use crate::storage::MessageRepository;

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub repo: MessageRepository,
    pub registry: Arc<SqliteServerRegistry>,
    pub chat_client: Arc<dyn ChatClient>,
    pub generator: Arc<dyn ResponseGenerator>,
    /// Bot user id cache, populated by the gateway ready event.
    pub bot_user_id: Arc<tokio::sync::RwLock<Option<u64>>>,
}

/// Builds BotComponents from config.
#[instrument(skip(config))]
pub async fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let repo = MessageRepository::new(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to initialize message storage"
            );
            anyhow::anyhow!("Failed to initialize message storage: {}", e)
        })?;

    let registry = Arc::new(
        SqliteServerRegistry::new(config.database_url())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to initialize server registry");
                anyhow::anyhow!("Failed to initialize server registry: {}", e)
            })?,
    );

    let generator = match config.openai_base_url() {
        Some(url) => OpenAIGenerator::with_base_url(
            config.openai_api_key().to_string(),
            url.to_string(),
        ),
        None => OpenAIGenerator::new(config.openai_api_key().to_string()),
    }
    .with_model(config.openai_model().to_string())
    .with_system_prompt_opt(config.system_prompt().map(String::from));

    let chat_client = Arc::new(DiscordChatClient::new(config.discord_token()));

    Ok(BotComponents {
        repo,
        registry,
        chat_client,
        generator: Arc::new(generator),
        bot_user_id: Arc::new(tokio::sync::RwLock::new(None)),
    })
}

/// Assembles the handler chain: eligibility guard, then conversation routing.
pub fn build_chain(components: &BotComponents, config: &BotConfig) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(EligibilityHandler::new()))
        .add_handler(Arc::new(ConversationHandler::new(
            components.bot_user_id.clone(),
            components.chat_client.clone(),
            components.registry.clone() as Arc<dyn ServerRegistry>,
            components.repo.clone(),
            components.generator.clone(),
            config.timezone().to_string(),
        )))
}

/// Main entry: validate config, init logging, build components and chain, run the gateway.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(parent) = std::path::Path::new(config.log_file()).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        model = %config.openai_model(),
        "Initializing bot"
    );

    let components = build_components(&config).await?;
    let chain = build_chain(&components, &config);
    let bot_user_id = components.bot_user_id.clone();

    info!("Bot started successfully");

    run_gateway(config.discord_token(), chain, bot_user_id).await
}
