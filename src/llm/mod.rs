//! # Response generation
//!
//! Defines the [`ResponseGenerator`] trait and an OpenAI implementation.
//! The generator receives the stored conversation and the channel context and
//! returns the reply text; the handlers stay transport- and vendor-agnostic.

use anyhow::Result;
use async_trait::async_trait;

use crate::storage::MessageRecord;

mod context;
mod openai;

pub use context::ChannelContext;
pub use openai::{OpenAIGenerator, DEFAULT_SYSTEM_CONTENT};

/// Response generation interface: conversation history + channel context → reply text.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Returns the model reply for the given conversation. `history` is
    /// chronological; records with the sent direction are prior bot replies.
    async fn generate(
        &self,
        history: &[MessageRecord],
        context: &ChannelContext,
    ) -> Result<String>;
}
