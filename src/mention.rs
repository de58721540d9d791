//! Shared pure functions for conversation triggers: the `/chat` command prefix
//! and bot @-mentions.
//!
//! Used by [`crate::handlers::ConversationHandler`] to decide when a message
//! starts a new conversation and to extract the prompt from it.

use crate::core::Message;

/// Command prefix that starts a new conversation.
pub const CHAT_COMMAND: &str = "/chat";

/// Returns true if `content` invokes the chat command (`/chat` alone or followed by a space).
#[inline]
pub fn has_chat_command(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed == CHAT_COMMAND || trimmed.starts_with(&format!("{} ", CHAT_COMMAND))
}

/// Strips the command prefix from `content` and returns the trimmed prompt.
#[inline]
pub fn strip_chat_command(content: &str) -> String {
    content
        .trim_start()
        .strip_prefix(CHAT_COMMAND)
        .unwrap_or(content)
        .trim()
        .to_string()
}

/// Returns true if the message's mention list contains the bot user.
#[inline]
pub fn is_bot_mentioned(mentions: &[u64], bot_user_id: u64) -> bool {
    mentions.contains(&bot_user_id)
}

/// Removes the bot's inline mention tokens (`<@id>` / `<@!id>`) from `content`
/// and returns the trimmed prompt.
pub fn strip_mention(content: &str, bot_user_id: u64) -> String {
    content
        .replace(&format!("<@!{}>", bot_user_id), "")
        .replace(&format!("<@{}>", bot_user_id), "")
        .trim()
        .to_string()
}

/// Resolves the prompt when the message starts a new conversation.
///
/// - **`/chat` command**: returns `Some(content with the prefix stripped)`.
/// - **@-mention of the bot**: returns `Some(content with the mention tokens stripped)`.
/// - Otherwise returns `None`.
///
/// The returned prompt may be empty; the caller decides how to answer an
/// empty prompt. When `bot_user_id` is not known yet, only the command
/// prefix triggers.
pub fn get_prompt(message: &Message, bot_user_id: Option<u64>) -> Option<String> {
    if has_chat_command(&message.content) {
        return Some(strip_chat_command(&message.content));
    }
    if let Some(id) = bot_user_id {
        if is_bot_mentioned(&message.mentions, id) {
            return Some(strip_mention(&message.content, id));
        }
    }
    None
}
