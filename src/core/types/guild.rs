//! Guild identity for the core model.

use serde::{Deserialize, Serialize};

/// Guild (server) a message belongs to. Absent on DMs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guild {
    pub id: u64,
    pub name: String,
}
