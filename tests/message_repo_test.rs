//! Integration tests for [`discord_llm_bot::MessageRepository`].
//!
//! Covers record_user_message, record_ai_response, get_message_by_id, and the
//! reply-reference walk in conversation_history, using a temp-file SQLite database.

use discord_llm_bot::MessageRepository;
use tempfile::TempDir;

/// Returns a fresh SQLite database path in a temp dir so each test gets an isolated DB.
fn fresh_db_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("test.db");
    let path_str = path.to_string_lossy().into_owned();
    (dir, path_str)
}

/// **Test: Recorded user message can be fetched by id with all fields intact.**
#[tokio::test]
async fn test_record_and_get_user_message() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    let record = repo
        .record_user_message(99, 42, "alice", 100, "Hello World", 7, None)
        .await
        .expect("Failed to record message");
    assert_eq!(record.id, "100");

    let retrieved = repo
        .get_message_by_id(100)
        .await
        .expect("Failed to get message")
        .expect("Message should exist");

    assert_eq!(retrieved.server_id, 99);
    assert_eq!(retrieved.user_id, Some(42));
    assert_eq!(retrieved.username, Some("alice".to_string()));
    assert_eq!(retrieved.channel_id, Some(7));
    assert_eq!(retrieved.content, "Hello World");
    assert_eq!(retrieved.direction, "received");
    assert_eq!(retrieved.reply_to_message_id, None);
}

/// **Test: Unknown message id returns None.**
#[tokio::test]
async fn test_get_message_by_id_missing() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    let retrieved = repo.get_message_by_id(12345).await.expect("query");
    assert!(retrieved.is_none());
}

/// **Test: AI response is stored as a sent record linked to the user message.**
#[tokio::test]
async fn test_record_ai_response() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    repo.record_user_message(99, 42, "alice", 100, "question", 7, None)
        .await
        .expect("record user message");
    repo.record_ai_response(99, 200, "answer", 100)
        .await
        .expect("record AI response");

    let record = repo
        .get_message_by_id(200)
        .await
        .expect("query")
        .expect("AI record should exist");

    assert_eq!(record.server_id, 99);
    assert_eq!(record.user_id, None);
    assert_eq!(record.username, None);
    assert_eq!(record.content, "answer");
    assert_eq!(record.direction, "sent");
    assert_eq!(record.reply_to_message_id, Some("100".to_string()));
    assert!(record.is_from_bot());
}

/// **Test: conversation_history walks reply references and returns
/// chronological order (oldest first, queried message last).**
#[tokio::test]
async fn test_conversation_history_walk() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    // user 100 → bot 200 → user 300 → bot 400
    repo.record_user_message(99, 42, "alice", 100, "first question", 7, None)
        .await
        .expect("record");
    repo.record_ai_response(99, 200, "first answer", 100)
        .await
        .expect("record");
    repo.record_user_message(99, 42, "alice", 300, "second question", 7, Some(200))
        .await
        .expect("record");
    repo.record_ai_response(99, 400, "second answer", 300)
        .await
        .expect("record");

    let history = repo.conversation_history(400).await.expect("history");

    let contents: Vec<&str> = history.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["first question", "first answer", "second question", "second answer"]
    );
}

/// **Test: A dangling reply reference truncates the walk instead of failing.**
#[tokio::test]
async fn test_conversation_history_dangling_reference() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    // 300 references 250, which was never stored.
    repo.record_user_message(99, 42, "alice", 300, "orphan reply", 7, Some(250))
        .await
        .expect("record");

    let history = repo.conversation_history(300).await.expect("history");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].content, "orphan reply");
}

/// **Test: History of an unknown message id is empty.**
#[tokio::test]
async fn test_conversation_history_unknown_id() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    let history = repo.conversation_history(12345).await.expect("history");
    assert!(history.is_empty());
}

/// **Test: Duplicate message ids are rejected (primary key).**
#[tokio::test]
async fn test_duplicate_message_id_fails() {
    let (_dir, database_url) = fresh_db_path();
    let repo = MessageRepository::new(&database_url)
        .await
        .expect("Failed to create repository");

    repo.record_user_message(99, 42, "alice", 100, "first", 7, None)
        .await
        .expect("record");

    let duplicate = repo
        .record_user_message(99, 42, "alice", 100, "second", 7, None)
        .await;
    assert!(duplicate.is_err());
}
