use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BotError {
    #[error("Database error: {message}")]
    DatabaseError { message: String },

    #[error("Telegram API error: {message}")]
    TelegramError { message: String },
}

impl BotError {
    pub fn database_error(message: impl Into<String>) -> Self {
        Self::DatabaseError {
            message: message.into(),
        }
    }

    pub fn telegram_error(message: impl Into<String>) -> Self {
        Self::TelegramError {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for BotError {
    fn from(err: sqlx::Error) -> Self {
        Self::database_error(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
