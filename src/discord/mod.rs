//! Discord transport: serenity adapters, ChatClient implementation, gateway runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{DiscordMessageWrapper, DiscordUserWrapper};
pub use bot_adapter::DiscordChatClient;
pub use runner::{run_gateway, DiscordEventHandler};
