pub mod sender;

pub use sender::{OutboundSender, TelegramTransport};
