mod bot;
mod config;
mod db;
mod telegram;
mod types;
mod users;

use anyhow::Result;
use bot::{register_command_menu, CommandDispatcher};
use config::Config;
use std::sync::Arc;
use telegram::{OutboundSender, TelegramTransport};
use teloxide::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use users::SqliteUserStore;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("greeter_bot=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);
    debug!("Config loaded from environment");

    let version = env!("CARGO_PKG_VERSION");
    info!(bot_name = %config.telegram_bot_name, "greeter-bot v{}", version);

    let user_store = SqliteUserStore::new(&config.user_db_path).await?;
    info!(
        db_path = %config.user_db_path.display(),
        users = user_store.count().await?,
        "User store initialized"
    );

    let bot = Bot::new(&config.telegram_bot_token);
    register_command_menu(&bot).await;

    let sender = OutboundSender::new(Arc::new(TelegramTransport::new(bot.clone())));
    let dispatcher = Arc::new(CommandDispatcher::new(
        Arc::clone(&config),
        Arc::new(user_store.clone()),
        sender,
    ));

    let handler = dptree::entry().endpoint({
        let dispatcher = Arc::clone(&dispatcher);
        move |update: Update| {
            let dispatcher = Arc::clone(&dispatcher);
            async move {
                dispatcher.process(&update).await;
                respond(())
            }
        }
    });

    info!("Bot connected. Press Ctrl+C to stop.");

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped, closing user store...");
    user_store.close().await;

    info!("Shutdown complete.");
    Ok(())
}
