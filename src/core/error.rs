use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Discord error: {0}")]
    Discord(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
