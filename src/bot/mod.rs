mod commands;
pub mod dispatcher;
pub mod handlers;
pub mod incoming;
mod menu;

pub use commands::Command;
pub use dispatcher::CommandDispatcher;
pub use menu::register_command_menu;
