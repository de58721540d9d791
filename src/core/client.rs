//! Chat platform abstraction used by the handlers.
//!
//! [`ChatClient`] is transport-agnostic; the serenity-backed implementation
//! lives in [`crate::discord`], and tests substitute their own.

use async_trait::async_trait;

use super::error::Result;
use super::types::Message;

/// Send/fetch operations the conversation handlers need from the platform.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `text` as a reply to `message` in its channel and returns the sent message id.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<u64>;
    /// Fetches a single message by channel and message id (e.g. the target of a reply).
    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<Message>;
}
