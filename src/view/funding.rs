//! Funding-rate rankings derived from linear tickers.

use crate::exchange::{BybitClient, ExchangeError, TickerSummary};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::instrument;

/// Number of quotes ranked before polarity filtering.
const FILTER_POOL_SIZE: usize = 200;

/// Derived funding-rate record for one trading symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingQuote {
    pub symbol: String,
    pub rate: Decimal,
    pub rate_pct: Decimal,
    pub abs_rate: Decimal,
}

/// Top `limit` quotes by absolute funding rate, descending.
///
/// `limit` is taken as-is; clamping is the dispatcher's job.
#[instrument(skip(client))]
pub async fn ranked_funding(
    client: &BybitClient,
    limit: usize,
) -> Result<Vec<FundingQuote>, ExchangeError> {
    let tickers = client.get_linear_tickers().await?;
    Ok(rank(tickers, limit))
}

/// Top `limit` strictly positive (or strictly negative) quotes by absolute
/// rate. Zero rates appear in neither polarity.
#[instrument(skip(client))]
pub async fn filtered_funding(
    client: &BybitClient,
    limit: usize,
    want_positive: bool,
) -> Result<Vec<FundingQuote>, ExchangeError> {
    let ranked = ranked_funding(client, FILTER_POOL_SIZE).await?;
    Ok(filter_by_sign(ranked, limit, want_positive))
}

/// Convert raw tickers into sorted, truncated quotes.
///
/// Tickers whose funding-rate field is absent, empty, unparsable, or exactly
/// zero carry no signal and are dropped.
fn rank(tickers: Vec<TickerSummary>, limit: usize) -> Vec<FundingQuote> {
    let mut quotes: Vec<FundingQuote> = tickers.into_iter().filter_map(quote_from_ticker).collect();
    quotes.sort_by(|a, b| b.abs_rate.cmp(&a.abs_rate));
    quotes.truncate(limit);
    quotes
}

fn quote_from_ticker(ticker: TickerSummary) -> Option<FundingQuote> {
    if ticker.funding_rate.is_empty() {
        return None;
    }
    let rate = Decimal::from_str(&ticker.funding_rate).ok()?;
    if rate.is_zero() {
        return None;
    }
    Some(FundingQuote {
        symbol: ticker.symbol,
        rate,
        rate_pct: rate * Decimal::ONE_HUNDRED,
        abs_rate: rate.abs(),
    })
}

fn filter_by_sign(
    quotes: Vec<FundingQuote>,
    limit: usize,
    want_positive: bool,
) -> Vec<FundingQuote> {
    let mut filtered: Vec<FundingQuote> = quotes
        .into_iter()
        .filter(|q| {
            if want_positive {
                q.rate > Decimal::ZERO
            } else {
                q.rate < Decimal::ZERO
            }
        })
        .collect();
    filtered.sort_by(|a, b| b.abs_rate.cmp(&a.abs_rate));
    filtered.truncate(limit);
    filtered
}
