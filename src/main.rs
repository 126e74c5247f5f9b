//! Bybit Funding Bot - Main Entry Point

use anyhow::Result;
use bybit_funding_bot::config::Config;
use bybit_funding_bot::dispatch::Dispatcher;
use bybit_funding_bot::exchange::BybitClient;
use bybit_funding_bot::telegram::{MessageSink, TelegramClient};
use bybit_funding_bot::{poll, server};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Bybit Funding Bot CLI
#[derive(Parser)]
#[command(name = "bybit-funding-bot")]
#[command(version, about = "Telegram bot for Bybit funding rates and portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the Telegram webhook over HTTP
    Serve {
        /// Listen address (host:port); overrides the configured value
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Poll the Telegram API for updates instead of serving a webhook
    Poll,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = Config::load()?;
    config.validate()?;

    if config.bybit.api_key.is_empty() {
        info!("No Bybit credentials configured; portfolio commands will report an error");
    }

    let client = BybitClient::new(&config.bybit)?;
    let telegram = Arc::new(TelegramClient::new(&config.telegram)?);
    let sink: Arc<dyn MessageSink> = telegram.clone();
    let dispatcher = Arc::new(Dispatcher::new(client, sink));

    match cli.command {
        Some(Commands::Poll) => poll::run(dispatcher, telegram).await,
        Some(Commands::Serve { bind }) => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            server::run(dispatcher, &bind).await
        }
        None => server::run(dispatcher, &config.server.bind).await,
    }
}

/// Initialize logging to stdout.
fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bybit_funding_bot=debug".parse()?)
                .add_directive(Level::INFO.into()),
        )
        .with_target(true)
        .init();

    Ok(())
}
