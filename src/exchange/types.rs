//! Type definitions for Bybit v5 API responses.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Standard Bybit v5 response wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    pub result: Option<T>,
}

/// Subset of a linear ticker consumed by the funding views.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSummary {
    pub symbol: String,
    /// Raw funding-rate string; empty or absent when the venue reports none.
    #[serde(default)]
    pub funding_rate: String,
}

/// `result` payload of `/v5/market/tickers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerList {
    #[serde(default)]
    pub list: Vec<TickerSummary>,
}

/// `result` payload of `/v5/account/wallet-balance`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletList {
    #[serde(default)]
    pub list: Vec<WalletAccount>,
}

/// One account entry in a wallet-balance response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub coin: Vec<CoinBalance>,
}

/// Per-coin balance inside an account entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    pub coin: String,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub equity: Decimal,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub available_to_withdraw: Decimal,
}

/// `result` payload of `/v5/position/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionList {
    #[serde(default)]
    pub list: Vec<RawPosition>,
}

/// Position entry as reported by the venue.
///
/// `side` stays a raw string: Bybit sends `"Buy"`, `"Sell"`, or `"None"`
/// for flat entries, which are filtered out by size downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    pub symbol: String,
    #[serde(default)]
    pub side: String,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub size: Decimal,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub unrealised_pnl: Decimal,
    #[serde(default = "default_leverage")]
    pub leverage: String,
}

fn default_leverage() -> String {
    "1".to_string()
}
