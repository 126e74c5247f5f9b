//! Chat command parsing and routing.
//!
//! One-shot per message: parse, route to a view, render, send. Exchange
//! failures stop at the handler boundary as an `오류:` line in the chat;
//! they never reach the hosting layer.

use crate::exchange::{BybitClient, ExchangeError};
use crate::render;
use crate::telegram::{MessageSink, Update};
use crate::view;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Parsed chat command with its clamped limit where applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Funding { limit: usize },
    Top { limit: usize },
    Bottom { limit: usize },
    Portfolio,
}

impl Command {
    /// Parse a message line into a command, or `None` for anything the bot
    /// does not answer.
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();
        let (token, raw_arg) = match text.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest),
            None => (text, ""),
        };
        let lowered = token.to_lowercase();
        // "/funding@botname" and "/funding" are the same command
        let command = lowered.split('@').next().unwrap_or_default();

        match command {
            "/start" | "/help" => Some(Command::Help),
            "/funding" | "/f" => Some(Command::Funding {
                limit: parse_limit(raw_arg, 20, 50),
            }),
            "/top" => Some(Command::Top {
                limit: parse_limit(raw_arg, 10, 30),
            }),
            "/bottom" => Some(Command::Bottom {
                limit: parse_limit(raw_arg, 10, 30),
            }),
            "/portfolio" | "/p" => Some(Command::Portfolio),
            _ => None,
        }
    }
}

/// Digits-only limit parsing with an upper clamp.
///
/// Anything that is not purely ASCII digits, including a leading minus,
/// falls back to the default rather than erroring.
fn parse_limit(raw: &str, default: usize, max: usize) -> usize {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return default.min(max);
    }
    // A digits-only value that overflows is far above any max
    trimmed.parse::<usize>().unwrap_or(max).min(max)
}

/// Routes parsed commands to views and pushes rendered text into the sink.
pub struct Dispatcher {
    client: BybitClient,
    sink: Arc<dyn MessageSink>,
}

impl Dispatcher {
    pub fn new(client: BybitClient, sink: Arc<dyn MessageSink>) -> Self {
        Self { client, sink }
    }

    /// Handle one inbound update end to end. Never fails: command errors are
    /// rendered into the chat, delivery failures are logged.
    #[instrument(skip(self, update), fields(update_id = update.update_id))]
    pub async fn handle_update(&self, update: Update) {
        let Some(message) = update.message else {
            return;
        };
        self.handle_message(message.chat.id, &message.text).await;
    }

    pub async fn handle_message(&self, chat_id: i64, text: &str) {
        let Some(command) = Command::parse(text) else {
            return;
        };
        info!(chat_id, ?command, "Handling command");

        let reply = match self.execute(&command).await {
            Ok(text) => text,
            Err(e) => format!("오류: {e}"),
        };

        if let Err(e) = self.sink.send_message(chat_id, &reply).await {
            warn!(chat_id, error = %e, "Failed to deliver reply");
        }
    }

    async fn execute(&self, command: &Command) -> Result<String, ExchangeError> {
        match *command {
            Command::Help => Ok(render::help().to_string()),
            Command::Funding { limit } => {
                let quotes = view::ranked_funding(&self.client, limit).await?;
                Ok(render::funding_list(&quotes, limit))
            }
            Command::Top { limit } => {
                let quotes = view::filtered_funding(&self.client, limit, true).await?;
                Ok(render::filtered_list(&quotes, limit, true))
            }
            Command::Bottom { limit } => {
                let quotes = view::filtered_funding(&self.client, limit, false).await?;
                Ok(render::filtered_list(&quotes, limit, false))
            }
            Command::Portfolio => {
                let wallet = view::wallet_usdt(&self.client).await?;
                let positions = view::open_positions(&self.client).await?;
                Ok(render::portfolio(wallet.as_ref(), &positions))
            }
        }
    }
}
