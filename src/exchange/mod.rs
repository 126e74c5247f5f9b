//! Bybit v5 REST API integration.
//!
//! Provides public market-data access (tickers) and signed account access
//! (wallet balance, positions). Every response arrives in the standard
//! `{retCode, retMsg, result}` envelope; a non-zero code is surfaced as an
//! [`ExchangeError::Api`] carrying the venue's message.

mod client;
mod sign;
mod types;

pub use client::BybitClient;
pub use sign::{canonical_query, sign_request};
pub use types::*;

use thiserror::Error;

/// Errors surfaced by exchange calls.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Credentials are missing; raised before any network I/O.
    #[error("API 키가 설정되지 않았습니다")]
    MissingCredentials,
    /// Non-zero `retCode` in the response envelope, carrying `retMsg`.
    #[error("{0}")]
    Api(String),
    /// Network, timeout, or body-decoding failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
