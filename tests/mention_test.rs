//! Unit tests for [`discord_llm_bot::mention`]: command prefix, mention
//! detection, and prompt resolution.

use chrono::Utc;
use discord_llm_bot::mention::{
    get_prompt, has_chat_command, is_bot_mentioned, strip_chat_command, strip_mention,
};
use discord_llm_bot::{Channel, ChannelKind, Guild, Message, User};

const BOT_ID: u64 = 777;

fn message(content: &str, mentions: Vec<u64>) -> Message {
    Message {
        id: 1,
        author: User {
            id: 42,
            name: "alice".to_string(),
            is_bot: false,
        },
        channel: Channel {
            id: 7,
            name: "general".to_string(),
            kind: ChannelKind::GuildText,
        },
        guild: Some(Guild {
            id: 99,
            name: "Test".to_string(),
        }),
        content: content.to_string(),
        mentions,
        referenced_message_id: None,
        created_at: Utc::now(),
    }
}

// --- has_chat_command / strip_chat_command ---

#[test]
fn chat_command_detected() {
    assert!(has_chat_command("/chat hello"));
    assert!(has_chat_command("/chat"));
    assert!(has_chat_command("  /chat hello"));
}

#[test]
fn chat_command_requires_word_boundary() {
    assert!(!has_chat_command("/chatter nonsense"));
    assert!(!has_chat_command("say /chat hello"));
    assert!(!has_chat_command("hello"));
}

#[test]
fn strip_chat_command_trims_prompt() {
    assert_eq!(strip_chat_command("/chat   what is Rust?  "), "what is Rust?");
    assert_eq!(strip_chat_command("/chat"), "");
}

// --- is_bot_mentioned / strip_mention ---

#[test]
fn bot_mention_detected_by_id() {
    assert!(is_bot_mentioned(&[1, BOT_ID, 3], BOT_ID));
    assert!(!is_bot_mentioned(&[1, 3], BOT_ID));
    assert!(!is_bot_mentioned(&[], BOT_ID));
}

#[test]
fn strip_mention_removes_both_token_forms() {
    assert_eq!(strip_mention("<@777> hello", BOT_ID), "hello");
    assert_eq!(strip_mention("<@!777> hello", BOT_ID), "hello");
    assert_eq!(strip_mention("hello <@777> there", BOT_ID), "hello  there");
    assert_eq!(strip_mention("<@777>", BOT_ID), "");
}

// --- get_prompt ---

#[test]
fn get_prompt_from_chat_command() {
    let msg = message("/chat what is Rust?", vec![]);
    assert_eq!(get_prompt(&msg, Some(BOT_ID)), Some("what is Rust?".to_string()));
}

#[test]
fn get_prompt_from_mention() {
    let msg = message("<@777> hello bot", vec![BOT_ID]);
    assert_eq!(get_prompt(&msg, Some(BOT_ID)), Some("hello bot".to_string()));
}

#[test]
fn get_prompt_empty_for_bare_command() {
    let msg = message("/chat", vec![]);
    assert_eq!(get_prompt(&msg, Some(BOT_ID)), Some(String::new()));
}

#[test]
fn get_prompt_none_without_trigger() {
    let msg = message("just talking", vec![]);
    assert_eq!(get_prompt(&msg, Some(BOT_ID)), None);
}

#[test]
fn get_prompt_ignores_mentions_of_others() {
    let msg = message("<@555> hey", vec![555]);
    assert_eq!(get_prompt(&msg, Some(BOT_ID)), None);
}

#[test]
fn get_prompt_without_known_bot_id_only_honors_command() {
    let mention_msg = message("<@777> hello", vec![BOT_ID]);
    assert_eq!(get_prompt(&mention_msg, None), None);

    let command_msg = message("/chat hello", vec![]);
    assert_eq!(get_prompt(&command_msg, None), Some("hello".to_string()));
}
