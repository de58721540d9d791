//! Registered guild configuration.

use serde::{Deserialize, Serialize};

/// A registered guild: name, optional context passed to the model, and the
/// channel whitelist the bot responds in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    /// Free-form notes about the server, included in the model's system prompt.
    pub server_context: Option<String>,
    pub whitelist: Vec<u64>,
}

impl Server {
    pub fn is_channel_whitelisted(&self, channel_id: u64) -> bool {
        self.whitelist.contains(&channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_whitelist() {
        let server = Server {
            id: 1,
            name: "Test".to_string(),
            server_context: None,
            whitelist: vec![10, 20],
        };

        assert!(server.is_channel_whitelisted(10));
        assert!(server.is_channel_whitelisted(20));
        assert!(!server.is_channel_whitelisted(30));
    }

    #[test]
    fn test_empty_whitelist_rejects_all() {
        let server = Server {
            id: 1,
            name: "Test".to_string(),
            server_context: None,
            whitelist: vec![],
        };

        assert!(!server.is_channel_whitelisted(10));
    }
}
