//! Integration tests for [`discord_llm_bot::SqliteServerRegistry`].
//!
//! Covers registration, lookup, channel whitelisting, and server context,
//! using a temp-file SQLite database.

use discord_llm_bot::{ServerRegistry, SqliteServerRegistry};
use tempfile::TempDir;

/// Returns a fresh SQLite database path in a temp dir so each test gets an isolated DB.
fn fresh_db_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("test.db");
    let path_str = path.to_string_lossy().into_owned();
    (dir, path_str)
}

/// **Test: Unknown guild returns None.**
#[tokio::test]
async fn test_get_unknown_server() {
    let (_dir, database_url) = fresh_db_path();
    let registry = SqliteServerRegistry::new(&database_url)
        .await
        .expect("Failed to create registry");

    let server = registry.get_server(99).await.expect("query");
    assert!(server.is_none());
}

/// **Test: Registered guild comes back with its name, empty whitelist, and no context.**
#[tokio::test]
async fn test_add_and_get_server() {
    let (_dir, database_url) = fresh_db_path();
    let registry = SqliteServerRegistry::new(&database_url)
        .await
        .expect("Failed to create registry");

    registry.add_server(99, "Rust Hideout").await.expect("add");

    let server = registry
        .get_server(99)
        .await
        .expect("query")
        .expect("server should exist");

    assert_eq!(server.id, 99);
    assert_eq!(server.name, "Rust Hideout");
    assert!(server.server_context.is_none());
    assert!(server.whitelist.is_empty());
    assert!(!server.is_channel_whitelisted(7));
}

/// **Test: Registering the same guild twice keeps the original record.**
#[tokio::test]
async fn test_add_server_is_idempotent() {
    let (_dir, database_url) = fresh_db_path();
    let registry = SqliteServerRegistry::new(&database_url)
        .await
        .expect("Failed to create registry");

    registry.add_server(99, "Original").await.expect("add");
    registry.add_server(99, "Renamed").await.expect("add again");

    let server = registry
        .get_server(99)
        .await
        .expect("query")
        .expect("server should exist");
    assert_eq!(server.name, "Original");
}

/// **Test: Whitelisted channels are returned with the server; whitelisting is idempotent.**
#[tokio::test]
async fn test_whitelist_channel() {
    let (_dir, database_url) = fresh_db_path();
    let registry = SqliteServerRegistry::new(&database_url)
        .await
        .expect("Failed to create registry");

    registry.add_server(99, "Rust Hideout").await.expect("add");
    registry.whitelist_channel(99, 7).await.expect("whitelist");
    registry.whitelist_channel(99, 7).await.expect("whitelist again");
    registry.whitelist_channel(99, 8).await.expect("whitelist");

    let server = registry
        .get_server(99)
        .await
        .expect("query")
        .expect("server should exist");

    assert_eq!(server.whitelist.len(), 2);
    assert!(server.is_channel_whitelisted(7));
    assert!(server.is_channel_whitelisted(8));
    assert!(!server.is_channel_whitelisted(9));
}

/// **Test: Server context can be set and cleared.**
#[tokio::test]
async fn test_set_server_context() {
    let (_dir, database_url) = fresh_db_path();
    let registry = SqliteServerRegistry::new(&database_url)
        .await
        .expect("Failed to create registry");

    registry.add_server(99, "Rust Hideout").await.expect("add");
    registry
        .set_server_context(99, Some("A community for Rust learners."))
        .await
        .expect("set context");

    let server = registry
        .get_server(99)
        .await
        .expect("query")
        .expect("server should exist");
    assert_eq!(
        server.server_context.as_deref(),
        Some("A community for Rust learners.")
    );

    registry
        .set_server_context(99, None)
        .await
        .expect("clear context");
    let server = registry
        .get_server(99)
        .await
        .expect("query")
        .expect("server should exist");
    assert!(server.server_context.is_none());
}
