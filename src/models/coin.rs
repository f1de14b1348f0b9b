//! Watchlist entry models

use chrono::DateTime;
use chrono_tz::Tz;

/// A liquidity commitment made to a coin at a fixed point in time,
/// used as the PnL baseline on its chart
#[derive(Debug, Clone)]
pub struct LiquidityEvent {
    /// When the liquidity was posted, in the market time zone
    pub timestamp: DateTime<Tz>,
    /// Committed capital in whole USD
    pub amount_usd: u64,
    /// Display label shown alongside the event (e.g. view count)
    pub label: String,
    /// Reference price at the event; `None` or zero falls back to the
    /// last observed sample price
    pub reference_price: Option<f64>,
}

/// One coin to fetch and chart
#[derive(Debug, Clone)]
pub struct CoinEntry {
    /// Identifier recognized by the upstream API (e.g. "simon-s-cat")
    pub coin_id: String,
    pub liquidity: LiquidityEvent,
    /// Earliest instant to request prices from
    pub chart_start: DateTime<Tz>,
}
