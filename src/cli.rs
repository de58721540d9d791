//! Command-line interface for the bot binary.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "discord-llm-bot", about = "Discord bot that routes whitelisted guild messages to an LLM")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot
    Run {
        /// Discord bot token; overrides DISCORD_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
}

/// Loads config from env (and .env), applying the optional CLI token override.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
