//! Storage models.

mod message_record;

pub use message_record::{MessageRecord, DIRECTION_RECEIVED, DIRECTION_SENT};
