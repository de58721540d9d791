//! Message repository: persistence and conversation-history queries.
//!
//! Uses SqlitePoolManager and MessageRecord. Callers record user messages and
//! AI responses and reconstruct a conversation by walking reply references.

use crate::storage::models::MessageRecord;
use crate::storage::sqlite_pool::SqlitePoolManager;
use tracing::info;

/// Upper bound for the reply-reference walk; a malformed chain or cycle is
/// truncated at the oldest reachable record instead of looping.
const HISTORY_WALK_LIMIT: usize = 64;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating messages table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                server_id INTEGER NOT NULL,
                user_id INTEGER,
                username TEXT,
                channel_id INTEGER,
                content TEXT NOT NULL,
                direction TEXT NOT NULL,
                reply_to_message_id TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_messages_server_id ON messages(server_id);
            CREATE INDEX IF NOT EXISTS idx_messages_channel_id ON messages(channel_id);
            CREATE INDEX IF NOT EXISTS idx_messages_reply_to ON messages(reply_to_message_id);
            CREATE INDEX IF NOT EXISTS idx_messages_created_at ON messages(created_at);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn save(&self, message: &MessageRecord) -> Result<(), sqlx::Error> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO messages (id, server_id, user_id, username, channel_id, content, direction, reply_to_message_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(message.server_id)
        .bind(message.user_id)
        .bind(&message.username)
        .bind(message.channel_id)
        .bind(&message.content)
        .bind(&message.direction)
        .bind(&message.reply_to_message_id)
        .bind(message.created_at)
        .execute(pool)
        .await?;

        info!(
            message_id = %message.id,
            direction = %message.direction,
            "Saved message record"
        );
        Ok(())
    }

    /// Stores an incoming user message and returns the stored record.
    pub async fn record_user_message(
        &self,
        server_id: u64,
        user_id: u64,
        username: &str,
        message_id: u64,
        content: &str,
        channel_id: u64,
        reply_to_message_id: Option<u64>,
    ) -> Result<MessageRecord, sqlx::Error> {
        let record = MessageRecord::received(
            server_id,
            user_id,
            username,
            message_id,
            content,
            channel_id,
            reply_to_message_id,
        );
        self.save(&record).await?;
        Ok(record)
    }

    /// Stores an AI response linked to the user message it answers.
    pub async fn record_ai_response(
        &self,
        server_id: u64,
        bot_message_id: u64,
        content: &str,
        user_message_id: u64,
    ) -> Result<(), sqlx::Error> {
        let record = MessageRecord::sent(server_id, bot_message_id, content, user_message_id);
        self.save(&record).await
    }

    pub async fn get_message_by_id(
        &self,
        message_id: u64,
    ) -> Result<Option<MessageRecord>, sqlx::Error> {
        self.get_record(&message_id.to_string()).await
    }

    async fn get_record(&self, id: &str) -> Result<Option<MessageRecord>, sqlx::Error> {
        let pool = self.pool_manager.pool();

        sqlx::query_as::<_, MessageRecord>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns the conversation ending at `message_id` in chronological order,
    /// reconstructed by walking stored reply references backwards.
    pub async fn conversation_history(
        &self,
        message_id: u64,
    ) -> Result<Vec<MessageRecord>, sqlx::Error> {
        let mut history = Vec::new();
        let mut cursor = Some(message_id.to_string());

        while let Some(id) = cursor {
            if history.len() >= HISTORY_WALK_LIMIT {
                break;
            }
            match self.get_record(&id).await? {
                Some(record) => {
                    cursor = record.reply_to_message_id.clone();
                    history.push(record);
                }
                None => break,
            }
        }

        history.reverse();
        info!(
            message_id = message_id,
            records = history.len(),
            "Reconstructed conversation history"
        );
        Ok(history)
    }
}
