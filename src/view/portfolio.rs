//! Wallet and position summaries from the unified account.

use crate::exchange::{BybitClient, ExchangeError, RawPosition, WalletAccount};
use rust_decimal::Decimal;
use tracing::instrument;

/// USDT balance snapshot from the unified account.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSnapshot {
    pub equity: Decimal,
    pub available_to_withdraw: Decimal,
}

/// Position direction for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Long,
    Short,
}

/// Open position summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    pub symbol: String,
    pub side: Side,
    pub size: Decimal,
    pub unrealised_pnl: Decimal,
    pub leverage: String,
}

/// USDT snapshot from the first account entry, or `None` when not held.
#[instrument(skip(client))]
pub async fn wallet_usdt(client: &BybitClient) -> Result<Option<WalletSnapshot>, ExchangeError> {
    let accounts = client.get_wallet_balance().await?;
    Ok(find_usdt(&accounts))
}

/// Positions with a strictly positive size, in exchange-returned order.
#[instrument(skip(client))]
pub async fn open_positions(client: &BybitClient) -> Result<Vec<PositionSnapshot>, ExchangeError> {
    let positions = client.get_positions().await?;
    Ok(active_positions(positions))
}

fn find_usdt(accounts: &[WalletAccount]) -> Option<WalletSnapshot> {
    accounts
        .first()?
        .coin
        .iter()
        .find(|c| c.coin == "USDT")
        .map(|c| WalletSnapshot {
            equity: c.equity,
            available_to_withdraw: c.available_to_withdraw,
        })
}

fn active_positions(positions: Vec<RawPosition>) -> Vec<PositionSnapshot> {
    positions
        .into_iter()
        .filter(|p| p.size > Decimal::ZERO)
        .map(|p| PositionSnapshot {
            side: if p.side == "Buy" { Side::Long } else { Side::Short },
            symbol: p.symbol,
            size: p.size,
            unrealised_pnl: p.unrealised_pnl,
            leverage: p.leverage,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::CoinBalance;
    use rust_decimal_macros::dec;

    fn make_account(coins: Vec<CoinBalance>) -> WalletAccount {
        WalletAccount {
            account_type: "UNIFIED".to_string(),
            coin: coins,
        }
    }

    fn make_coin(code: &str, equity: Decimal, available: Decimal) -> CoinBalance {
        CoinBalance {
            coin: code.to_string(),
            equity,
            available_to_withdraw: available,
        }
    }

    fn make_position(symbol: &str, side: &str, size: Decimal) -> RawPosition {
        RawPosition {
            symbol: symbol.to_string(),
            side: side.to_string(),
            size,
            unrealised_pnl: dec!(1.5),
            leverage: "10".to_string(),
        }
    }

    #[test]
    fn test_find_usdt_in_first_account() {
        let accounts = vec![make_account(vec![
            make_coin("BTC", dec!(0.5), dec!(0.5)),
            make_coin("USDT", dec!(1234.56), dec!(1000)),
        ])];
        let snapshot = find_usdt(&accounts).unwrap();
        assert_eq!(snapshot.equity, dec!(1234.56));
        assert_eq!(snapshot.available_to_withdraw, dec!(1000));
    }

    #[test]
    fn test_find_usdt_absent() {
        let accounts = vec![make_account(vec![make_coin("BTC", dec!(1), dec!(1))])];
        assert!(find_usdt(&accounts).is_none());
        assert!(find_usdt(&[]).is_none());
    }

    #[test]
    fn test_usdt_only_searched_in_first_account() {
        let accounts = vec![
            make_account(vec![]),
            make_account(vec![make_coin("USDT", dec!(50), dec!(50))]),
        ];
        assert!(find_usdt(&accounts).is_none());
    }

    #[test]
    fn test_active_positions_drop_zero_size() {
        let positions = vec![
            make_position("BTCUSDT", "Buy", dec!(0.1)),
            make_position("ETHUSDT", "None", Decimal::ZERO),
            make_position("SOLUSDT", "Sell", dec!(2)),
        ];
        let active = active_positions(positions);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].symbol, "BTCUSDT");
        assert_eq!(active[0].side, Side::Long);
        assert_eq!(active[1].side, Side::Short);
    }

    #[test]
    fn test_exchange_order_preserved() {
        let positions = vec![
            make_position("ZUSDT", "Buy", dec!(1)),
            make_position("AUSDT", "Buy", dec!(1)),
        ];
        let active = active_positions(positions);
        assert_eq!(active[0].symbol, "ZUSDT");
        assert_eq!(active[1].symbol, "AUSDT");
    }
}
