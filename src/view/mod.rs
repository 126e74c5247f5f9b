//! Derived chat-facing views over raw exchange data.
//!
//! Each view re-fetches on every call; nothing persists across requests.

pub mod funding;
pub mod portfolio;

pub use funding::{filtered_funding, ranked_funding, FundingQuote};
pub use portfolio::{open_positions, wallet_usdt, PositionSnapshot, Side, WalletSnapshot};
