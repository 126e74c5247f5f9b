//! Fixed HTML message templates for chat replies.
//!
//! Pure formatting only; every function maps an already-derived view onto
//! the bot's Korean/emoji template set.

use crate::view::{FundingQuote, PositionSnapshot, Side, WalletSnapshot};
use rust_decimal::Decimal;

/// Minimum symbol column width in monospace lists.
const SYMBOL_WIDTH: usize = 12;

/// Static command reference.
pub fn help() -> &'static str {
    "<b>Bybit 펀딩비 봇</b>\n\
     \n\
     <b>명령어:</b>\n\
     /funding [N] - 펀딩비 상위 N개 (기본 20)\n\
     /f [N] - /funding 단축어\n\
     \n\
     /top [N] - 양수 펀딩비 상위 (롱 과열)\n\
     /bottom [N] - 음수 펀딩비 상위 (숏 과열)\n\
     \n\
     /portfolio - 포트폴리오 조회\n\
     /p - /portfolio 단축어\n\
     \n\
     /help - 도움말"
}

/// Ranked funding list with a long/short heat footer.
pub fn funding_list(quotes: &[FundingQuote], limit: usize) -> String {
    let mut lines = vec![format!("<b>펀딩비 상위 {limit}개</b>\n")];

    for (i, quote) in quotes.iter().enumerate() {
        let emoji = if quote.rate < Decimal::ZERO { "🔴" } else { "🟢" };
        lines.push(format!(
            "{}. {} <code>{:<width$}</code> {}%",
            i + 1,
            emoji,
            quote.symbol,
            signed_pct(quote.rate_pct),
            width = SYMBOL_WIDTH
        ));
    }

    let positive = quotes.iter().filter(|q| q.rate > Decimal::ZERO).count();
    let negative = quotes.len() - positive;
    lines.push(format!("\n🟢 롱과열: {positive}개 | 🔴 숏과열: {negative}개"));

    lines.join("\n")
}

/// Polarity-filtered funding list; no per-line heat emoji, no footer.
pub fn filtered_list(quotes: &[FundingQuote], limit: usize, positive: bool) -> String {
    let title = if positive {
        format!("🟢 <b>양수 펀딩비 상위 {limit}개</b> (롱 과열)\n")
    } else {
        format!("🔴 <b>음수 펀딩비 상위 {limit}개</b> (숏 과열)\n")
    };

    let mut lines = vec![title];
    for (i, quote) in quotes.iter().enumerate() {
        lines.push(format!(
            "{}. <code>{:<width$}</code> {}%",
            i + 1,
            quote.symbol,
            signed_pct(quote.rate_pct),
            width = SYMBOL_WIDTH
        ));
    }

    lines.join("\n")
}

/// Wallet and open-position summary.
pub fn portfolio(wallet: Option<&WalletSnapshot>, positions: &[PositionSnapshot]) -> String {
    let mut lines = vec!["<b>📊 포트폴리오</b>\n".to_string()];

    if let Some(wallet) = wallet {
        lines.push("<b>💵 USDT</b>".to_string());
        lines.push(format!("총 자산: {:.2}", wallet.equity));
        lines.push(format!("가용: {:.2}\n", wallet.available_to_withdraw));
    }

    if positions.is_empty() {
        lines.push("포지션 없음".to_string());
    } else {
        lines.push(format!("<b>📈 포지션 ({}개)</b>", positions.len()));
        for position in positions {
            let direction = match position.side {
                Side::Long => "🟢L",
                Side::Short => "🔴S",
            };
            lines.push(format!(
                "<code>{}</code> {} x{} | {}",
                position.symbol,
                direction,
                position.leverage,
                signed_amount(position.unrealised_pnl)
            ));
        }
    }

    lines.join("\n")
}

/// Percent to 4 decimal places with an explicit `+` for non-negative values.
fn signed_pct(pct: Decimal) -> String {
    if pct >= Decimal::ZERO {
        format!("+{pct:.4}")
    } else {
        format!("{pct:.4}")
    }
}

/// Amount to 2 decimal places with an explicit `+` for non-negative values.
fn signed_amount(amount: Decimal) -> String {
    if amount >= Decimal::ZERO {
        format!("+{amount:.2}")
    } else {
        format!("{amount:.2}")
    }
}
