//! # Bybit Funding Bot
//!
//! A Telegram bot that surfaces Bybit linear-perpetual funding rates and
//! unified-account portfolio summaries as chat commands.
//!
//! ## Architecture
//!
//! - `config`: Configuration management and validation
//! - `exchange`: Bybit v5 REST client (public + signed endpoints)
//! - `view`: Ranked/filtered funding and portfolio projections
//! - `render`: Fixed HTML message templates
//! - `dispatch`: Command parsing and routing
//! - `telegram`: Outbound message delivery and inbound update types
//! - `server`: Webhook hosting adapter (axum)
//! - `poll`: Long-polling hosting adapter

pub mod config;
pub mod dispatch;
pub mod exchange;
pub mod poll;
pub mod render;
pub mod server;
pub mod telegram;
pub mod view;

pub use config::Config;
