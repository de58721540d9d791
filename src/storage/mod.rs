//! Message persistence: SQLite pool, message records, and the repository.

mod models;
mod repository;
mod sqlite_pool;

pub use models::{MessageRecord, DIRECTION_RECEIVED, DIRECTION_SENT};
pub use repository::MessageRepository;
pub use sqlite_pool::SqlitePoolManager;
