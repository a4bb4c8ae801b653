//! /help command handler

use crate::bot::dispatcher::CommandDispatcher;
use crate::bot::incoming::IncomingMessage;
use crate::types::error::Result;
use futures::future::BoxFuture;
use tracing::debug;

pub const HELP_TEXT: &str = "This bot is created to study how to use Spring capabilities.\n\n\
     You can execute commands from the main menu on the left or by typing command:\n\n\
     Type /start to see welcome message\n\n\
     Type /data to see data stored about yourself\n\n\
     Type /deletedata to delete your data from storage\n\n\
     Type /settings to set your preferences\n\n\
     Type /help to see this message again";

pub fn route<'a>(
    dispatcher: &'a CommandDispatcher,
    msg: &'a IncomingMessage,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(handle_help(dispatcher, msg))
}

pub async fn handle_help(dispatcher: &CommandDispatcher, msg: &IncomingMessage) -> Result<()> {
    debug!(chat_id = msg.chat_id, "Handling /help");
    dispatcher.sender().send(msg.chat_id, HELP_TEXT).await;
    Ok(())
}
