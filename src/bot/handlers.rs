use crate::bot::dispatcher::CommandDispatcher;
use crate::bot::incoming::IncomingMessage;
use crate::types::error::Result;
use futures::future::BoxFuture;

pub mod help;
pub mod start;

/// Entry in the dispatcher's routing table.
pub type HandlerFn =
    for<'a> fn(&'a CommandDispatcher, &'a IncomingMessage) -> BoxFuture<'a, Result<()>>;

pub const UNRECOGNIZED_TEXT: &str = "Sorry, command was not recognized";

/// Fallback for any text that is not an implemented command.
pub fn unrecognized<'a>(
    dispatcher: &'a CommandDispatcher,
    msg: &'a IncomingMessage,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        dispatcher.sender().send(msg.chat_id, UNRECOGNIZED_TEXT).await;
        Ok(())
    })
}

