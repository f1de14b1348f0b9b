//! Data models shared across the fetch and render pipeline

pub mod chart;
pub mod coin;

pub use chart::{ChartMetrics, PricePoint};
pub use coin::{CoinEntry, LiquidityEvent};
