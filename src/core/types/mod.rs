//! Core types: user, channel, guild, message, handler response, and Handler trait.

mod channel;
mod guild;
mod handler;
mod message;
mod response;
mod user;

pub use channel::{Channel, ChannelKind};
pub use guild::Guild;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
