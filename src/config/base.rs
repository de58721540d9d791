//! Base config: Discord connection, logging, database, timezone. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Base config: Discord-related, logging, database, timezone only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// DISCORD_TOKEN
    pub discord_token: String,
    /// Message persistence database path (SQLite file)
    pub database_url: String,
    /// Log file path
    pub log_file: String,
    /// IANA timezone reported in the channel context (BOT_TIMEZONE)
    pub timezone: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides DISCORD_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let discord_token = match token {
            Some(t) => t,
            None => env::var("DISCORD_TOKEN").context("DISCORD_TOKEN not set")?,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./discord_bot.db".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/discord-bot.log".to_string());
        let timezone =
            env::var("BOT_TIMEZONE").unwrap_or_else(|_| "Europe/Berlin".to_string());

        Ok(Self {
            discord_token,
            database_url,
            log_file,
            timezone,
        })
    }
}
