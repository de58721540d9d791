//! Core types and traits: Handler, ChatClient, Message, HandlerResponse, error, logger.
//! Transport-agnostic; the Discord adapter lives in [`crate::discord`].

pub mod client;
pub mod error;
pub mod logger;
pub mod types;

pub use client::ChatClient;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Channel, ChannelKind, Guild, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser,
    User,
};
