//! Configuration management for the bot.
//!
//! Settings are loaded once at process start from environment variables and
//! an optional config file, then passed into the clients as explicit structs.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bybit API credentials and endpoint
    #[serde(default)]
    pub bybit: BybitConfig,
    /// Telegram bot credentials and endpoint
    #[serde(default)]
    pub telegram: TelegramConfig,
    /// Webhook server settings
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BybitConfig {
    /// API key for authenticated endpoints; may be empty for market data only
    #[serde(default)]
    pub api_key: String,
    /// Secret for signing requests
    #[serde(default)]
    pub api_secret: String,
    /// REST base URL; override for testnet
    #[serde(default = "default_bybit_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather
    #[serde(default)]
    pub bot_token: String,
    /// Bot API base URL
    #[serde(default = "default_telegram_url")]
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Webhook listen address (host:port)
    #[serde(default = "default_bind")]
    pub bind: String,
}

// Default value functions
fn default_bybit_url() -> String {
    "https://api.bybit.com".to_string()
}

fn default_telegram_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Config {
    /// Load configuration from environment variables and config files.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default().separator("__").prefix("BOT"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.bybit.api_key.is_empty() == self.bybit.api_secret.is_empty(),
            "bybit api_key and api_secret must be set together"
        );

        anyhow::ensure!(
            self.server.bind.parse::<std::net::SocketAddr>().is_ok(),
            "server bind address must be host:port"
        );

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bybit: BybitConfig::default(),
            telegram: TelegramConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for BybitConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: default_bybit_url(),
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_url: default_telegram_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let mut config = Config::default();
        config.bybit.api_key = "key-without-secret".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_bind_rejected() {
        let mut config = Config::default();
        config.server.bind = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }
}
