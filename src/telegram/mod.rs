//! Telegram delivery and inbound update types.

mod client;
mod types;

pub use client::TelegramClient;
pub use types::{Chat, Message, Update};

use async_trait::async_trait;
use thiserror::Error;

/// Failure delivering an outbound chat message.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Outbound chat message delivery.
///
/// The dispatcher only pushes text at a chat id through this seam; tests
/// capture messages here instead of hitting the Telegram API.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), SinkError>;
}
