//! /start command handler
//!
//! Registers the chat on first contact, then greets the user by first name.

use crate::bot::dispatcher::CommandDispatcher;
use crate::bot::incoming::IncomingMessage;
use crate::types::error::Result;
use crate::users::Registration;
use futures::future::BoxFuture;
use tracing::{debug, info};

/// `:blush:`
const BLUSH: &str = "\u{1F60A}";

fn format_greeting(first_name: &str) -> String {
    format!("Hi, {}, nice to meet you! {}", first_name, BLUSH)
}

pub fn route<'a>(
    dispatcher: &'a CommandDispatcher,
    msg: &'a IncomingMessage,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(handle_start(dispatcher, msg))
}

/// Handle /start.
///
/// The registration write completes before the greeting is sent; a store
/// failure aborts the update without a reply.
pub async fn handle_start(dispatcher: &CommandDispatcher, msg: &IncomingMessage) -> Result<()> {
    let registration = dispatcher
        .users()
        .register_if_absent(msg.chat_id, &msg.profile)
        .await?;
    match registration {
        Registration::Created(user) => {
            debug!(chat_id = user.chat_id, registered_at = user.registered_at, "Registered new user")
        }
        Registration::AlreadyRegistered => {
            debug!(chat_id = msg.chat_id, "Skipping registration of known user")
        }
    }

    let first_name = msg.profile.first_name.as_deref().unwrap_or_default();
    let answer = format_greeting(first_name);

    info!(chat_id = msg.chat_id, first_name = %first_name, "Replied to user");
    dispatcher.sender().send(msg.chat_id, &answer).await;

    Ok(())
}
