//! Chart data models

use chrono::DateTime;
use chrono_tz::Tz;

/// A single data point on a price chart, in the fixed market time zone
#[derive(Debug, Clone)]
pub struct PricePoint {
    pub timestamp: DateTime<Tz>,
    pub price: f64,
}

/// Derived metrics computed for one chart, never persisted
#[derive(Debug, Clone)]
pub struct ChartMetrics {
    /// Last sample's price
    pub current_price: f64,
    /// True maximum across all samples
    pub max_price: f64,
    /// Timestamp of the first sample attaining the maximum
    pub max_price_at: DateTime<Tz>,
    /// Reference price the PnL is measured against
    pub liquidity_price: f64,
    pub pnl_percent: f64,
    pub max_pnl_percent: f64,
}
