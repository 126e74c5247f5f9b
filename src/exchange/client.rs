//! Bybit v5 REST API client.

use crate::config::BybitConfig;
use crate::exchange::sign::{canonical_query, sign_request};
use crate::exchange::types::*;
use crate::exchange::ExchangeError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument};

/// Receive window sent with every signed request, in milliseconds.
const RECV_WINDOW_MS: u64 = 5_000;
/// Fixed timeout for all exchange calls; a slow venue is a transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bybit API client for public market data and signed account endpoints.
pub struct BybitClient {
    http: Client,
    api_key: String,
    api_secret: String,
    base_url: String,
}

impl BybitClient {
    /// Create a new Bybit client from configuration.
    pub fn new(config: &BybitConfig) -> Result<Self, ExchangeError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Current timestamp in milliseconds.
    fn timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }

    /// Unauthenticated GET returning the envelope's `result` payload.
    pub async fn fetch_public<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned + Default,
    {
        let query = canonical_query(params);
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };

        let envelope: ApiEnvelope<T> = self.http.get(&url).send().await?.json().await?;
        Self::unwrap_envelope(envelope)
    }

    /// Signed GET returning the envelope's `result` payload.
    ///
    /// Credentials are checked before any network I/O.
    pub async fn fetch_private<T>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned + Default,
    {
        let timestamp = Self::timestamp_ms();
        let query = canonical_query(params);
        let signature =
            sign_request(&self.api_key, &self.api_secret, timestamp, RECV_WINDOW_MS, &query)?;

        let url = format!("{}{}?{}", self.base_url, path, query);
        let envelope: ApiEnvelope<T> = self
            .http
            .get(&url)
            .header("X-BAPI-API-KEY", &self.api_key)
            .header("X-BAPI-SIGN", signature)
            .header("X-BAPI-TIMESTAMP", timestamp.to_string())
            .header("X-BAPI-RECV-WINDOW", RECV_WINDOW_MS.to_string())
            .send()
            .await?
            .json()
            .await?;
        Self::unwrap_envelope(envelope)
    }

    fn unwrap_envelope<T: Default>(envelope: ApiEnvelope<T>) -> Result<T, ExchangeError> {
        if envelope.ret_code != 0 {
            return Err(ExchangeError::Api(envelope.ret_msg));
        }
        Ok(envelope.result.unwrap_or_default())
    }

    // ==================== Market Data (Public) ====================

    /// Tickers for all linear perpetual contracts.
    #[instrument(skip(self))]
    pub async fn get_linear_tickers(&self) -> Result<Vec<TickerSummary>, ExchangeError> {
        let result: TickerList = self
            .fetch_public("/v5/market/tickers", &[("category", "linear")])
            .await?;
        debug!(count = result.list.len(), "Fetched linear tickers");
        Ok(result.list)
    }

    // ==================== Account (Authenticated) ====================

    /// Unified-account wallet balances.
    #[instrument(skip(self))]
    pub async fn get_wallet_balance(&self) -> Result<Vec<WalletAccount>, ExchangeError> {
        let result: WalletList = self
            .fetch_private("/v5/account/wallet-balance", &[("accountType", "UNIFIED")])
            .await?;
        Ok(result.list)
    }

    /// Current linear positions, in exchange-returned order.
    #[instrument(skip(self))]
    pub async fn get_positions(&self) -> Result<Vec<RawPosition>, ExchangeError> {
        let result: PositionList = self
            .fetch_private("/v5/position/list", &[("category", "linear")])
            .await?;
        Ok(result.list)
    }
}
