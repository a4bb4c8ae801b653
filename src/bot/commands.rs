use teloxide::utils::command::BotCommands;

/// Commands shown in the Telegram command menu.
///
/// Only `/start` and `/help` have handlers; the rest are advertised and fall
/// through to the "not recognized" reply.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "get a welcome message")]
    Start,

    #[command(description = "get your data stored")]
    Data,

    #[command(description = "delete data stored")]
    DeleteData,

    #[command(description = "info how to use this bot")]
    Help,

    #[command(description = "set your preferences")]
    Settings,
}
