use crate::bot::Command;
use teloxide::prelude::*;
use teloxide::types::BotCommandScope;
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

/// Publish the command menu. Failure is logged and otherwise ignored.
pub async fn register_command_menu(bot: &Bot) {
    let commands = Command::bot_commands();
    let count = commands.len();

    match bot
        .set_my_commands(commands)
        .scope(BotCommandScope::Default)
        .await
    {
        Ok(_) => info!(count = count, "Command menu registered"),
        Err(e) => error!(error = %e, "Error setting bot's commands"),
    }
}
