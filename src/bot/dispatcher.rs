//! Routes inbound text messages to command handlers.
//!
//! Commands are matched by exact, case-sensitive comparison of the whole
//! message text against a lookup table. Anything else goes to the fallback.

use crate::bot::handlers::{self, HandlerFn};
use crate::bot::incoming::IncomingMessage;
use crate::config::Config;
use crate::telegram::OutboundSender;
use crate::types::error::Result;
use crate::users::UserRepository;
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::Update;
use tracing::{debug, error};

pub const START: &str = "/start";
pub const HELP: &str = "/help";

pub struct CommandDispatcher {
    config: Arc<Config>,
    users: Arc<dyn UserRepository>,
    sender: OutboundSender,
    routes: HashMap<&'static str, HandlerFn>,
    fallback: HandlerFn,
}

impl CommandDispatcher {
    pub fn new(config: Arc<Config>, users: Arc<dyn UserRepository>, sender: OutboundSender) -> Self {
        let mut routes: HashMap<&'static str, HandlerFn> = HashMap::new();
        routes.insert(START, handlers::start::route);
        routes.insert(HELP, handlers::help::route);

        Self {
            config,
            users,
            sender,
            routes,
            fallback: handlers::unrecognized,
        }
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    pub fn sender(&self) -> &OutboundSender {
        &self.sender
    }

    /// Handle one update, logging any failure instead of returning it.
    ///
    /// Used as the teloxide endpoint so that one chat's failure never stops
    /// the update loop.
    /// Updates without a text message are ignored.
    pub async fn process(&self, update: &Update) {
        let Some(msg) = IncomingMessage::from_update(update) else {
            debug!("Ignoring update without text message");
            return;
        };

        if let Err(e) = self.dispatch(&msg).await {
            error!(
                chat_id = msg.chat_id,
                text = %msg.text,
                error = %e,
                "Update handling failed"
            );
        }
    }

    pub async fn dispatch(&self, msg: &IncomingMessage) -> Result<()> {
        let route = self.routes.get(msg.text.as_str()).copied();

        debug!(
            bot = %self.config.telegram_bot_name,
            chat_id = msg.chat_id,
            routed = route.is_some(),
            "Dispatching message"
        );

        let handler = route.unwrap_or(self.fallback);

        handler(self, msg).await
    }
}
