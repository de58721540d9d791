//! Guild registry: server configuration (whitelist, context) and its SQLite store.

mod registry;
mod server;

pub use registry::{ServerRegistry, SqliteServerRegistry};
pub use server::Server;
