//! # Discord LLM bot
//!
//! Routes whitelisted guild messages to an OpenAI-compatible backend and
//! threads the replies. Core (Handler, ChatClient, Message), chain
//! (HandlerChain), handlers (eligibility + conversation), storage, server
//! registry, and the serenity transport are wired by the runner.

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod discord;
pub mod handlers;
pub mod llm;
pub mod mention;
pub mod runner;
pub mod servers;
pub mod storage;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, BotError, Channel, ChannelKind, ChatClient, Guild, Handler, HandlerResponse,
    Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use config::BotConfig;
pub use discord::{run_gateway, DiscordChatClient, DiscordMessageWrapper, DiscordUserWrapper};
pub use handlers::{ConversationHandler, EligibilityHandler};
pub use llm::{ChannelContext, OpenAIGenerator, ResponseGenerator};
pub use runner::{build_chain, build_components, run_bot, BotComponents};
pub use servers::{Server, ServerRegistry, SqliteServerRegistry};
pub use storage::{MessageRecord, MessageRepository};
