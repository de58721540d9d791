//! Server registry: guild id → registered server configuration.
//!
//! [`ServerRegistry`] is the lookup/registration seam the conversation handler
//! consumes; [`SqliteServerRegistry`] backs it with the bot's SQLite database.

use async_trait::async_trait;
use tracing::info;

use crate::core::{BotError, Result};
use crate::storage::SqlitePoolManager;

use super::server::Server;

/// Lookup and registration of guild configurations.
#[async_trait]
pub trait ServerRegistry: Send + Sync {
    /// Returns the registered server for `guild_id`, or `None` if unknown.
    async fn get_server(&self, guild_id: u64) -> Result<Option<Server>>;
    /// Registers a guild with an empty whitelist and returns it.
    async fn add_server(&self, guild_id: u64, name: &str) -> Result<Server>;
}

/// SQLite-backed [`ServerRegistry`]: `servers` table plus `server_channels`
/// whitelist rows.
#[derive(Clone)]
pub struct SqliteServerRegistry {
    pool_manager: SqlitePoolManager,
}

impl SqliteServerRegistry {
    pub async fn new(database_url: &str) -> sqlx::Result<Self> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let registry = Self { pool_manager };
        registry.init().await?;
        Ok(registry)
    }

    async fn init(&self) -> sqlx::Result<()> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS servers (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                server_context TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS server_channels (
                server_id INTEGER NOT NULL,
                channel_id INTEGER NOT NULL,
                PRIMARY KEY (server_id, channel_id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Adds a channel to the guild's whitelist. Idempotent.
    pub async fn whitelist_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> sqlx::Result<()> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            "INSERT OR IGNORE INTO server_channels (server_id, channel_id) VALUES (?, ?)",
        )
        .bind(guild_id as i64)
        .bind(channel_id as i64)
        .execute(pool)
        .await?;

        info!(guild_id = guild_id, channel_id = channel_id, "Channel whitelisted");
        Ok(())
    }

    /// Sets the free-form server context included in the model's system prompt.
    pub async fn set_server_context(
        &self,
        guild_id: u64,
        context: Option<&str>,
    ) -> sqlx::Result<()> {
        let pool = self.pool_manager.pool();

        sqlx::query("UPDATE servers SET server_context = ? WHERE id = ?")
            .bind(context)
            .bind(guild_id as i64)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn fetch_server(&self, guild_id: u64) -> sqlx::Result<Option<Server>> {
        let pool = self.pool_manager.pool();

        let row: Option<(i64, String, Option<String>)> =
            sqlx::query_as("SELECT id, name, server_context FROM servers WHERE id = ?")
                .bind(guild_id as i64)
                .fetch_optional(pool)
                .await?;

        let Some((id, name, server_context)) = row else {
            return Ok(None);
        };

        let channels: Vec<(i64,)> =
            sqlx::query_as("SELECT channel_id FROM server_channels WHERE server_id = ?")
                .bind(id)
                .fetch_all(pool)
                .await?;

        Ok(Some(Server {
            id: id as u64,
            name,
            server_context,
            whitelist: channels.into_iter().map(|(c,)| c as u64).collect(),
        }))
    }

    async fn insert_server(&self, guild_id: u64, name: &str) -> sqlx::Result<Server> {
        let pool = self.pool_manager.pool();

        sqlx::query("INSERT OR IGNORE INTO servers (id, name) VALUES (?, ?)")
            .bind(guild_id as i64)
            .bind(name)
            .execute(pool)
            .await?;

        info!(guild_id = guild_id, name = %name, "Server registered");

        Ok(Server {
            id: guild_id,
            name: name.to_string(),
            server_context: None,
            whitelist: Vec::new(),
        })
    }
}

#[async_trait]
impl ServerRegistry for SqliteServerRegistry {
    async fn get_server(&self, guild_id: u64) -> Result<Option<Server>> {
        self.fetch_server(guild_id)
            .await
            .map_err(|e| BotError::Database(e.to_string()))
    }

    async fn add_server(&self, guild_id: u64, name: &str) -> Result<Server> {
        self.insert_server(guild_id, name)
            .await
            .map_err(|e| BotError::Database(e.to_string()))
    }
}
