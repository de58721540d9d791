//! User identity for the core model.

use serde::{Deserialize, Serialize};

/// Message author (id, display name, bot flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Whether the account is a bot; bot-authored messages are never processed.
    pub is_bot: bool,
}
