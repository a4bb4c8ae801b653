//! Outbound text delivery.
//!
//! Delivery is fire-and-forget: a failed send is logged and dropped so that
//! neither the current update nor any later one is aborted by it.

use crate::types::error::{BotError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{debug, error};

/// Transport that actually puts a text message on the wire.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;
}

/// Telegram Bot API transport.
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map_err(|e| BotError::telegram_error(e.to_string()))?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct OutboundSender {
    transport: Arc<dyn Transport>,
}

impl OutboundSender {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send `text` to `chat_id`, swallowing transport errors.
    pub async fn send(&self, chat_id: i64, text: &str) {
        match self.transport.send_text(chat_id, text).await {
            Ok(()) => debug!(chat_id = chat_id, len = text.len(), "Message sent"),
            Err(e) => error!(chat_id = chat_id, error = %e, "Error occurred while sending message"),
        }
    }
}
