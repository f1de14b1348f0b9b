//! Compiled-in watchlist and fixed rendering parameters.
//!
//! Everything the program charts is defined here: which coins, when their
//! liquidity was posted, at what price, and how far back to fetch. There are
//! no config files, environment variables, or CLI flags.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use crate::models::{CoinEntry, LiquidityEvent};

/// Fixed time zone for "now", stored event timestamps, and plotted samples.
/// Treated as a constant, never inferred from the runtime environment.
pub const MARKET_TZ: Tz = chrono_tz::Europe::Budapest;

/// Directory chart PNGs are written to
pub const CHART_DIR: &str = "charts";

/// Output chart dimensions in pixels
pub const CHART_WIDTH: u32 = 1280;
pub const CHART_HEIGHT: u32 = 720;

/// Wall-clock instant in the market time zone.
/// All watchlist dates are fixed valid local times, so resolution cannot fail.
fn market_time(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    MARKET_TZ
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("watchlist dates are valid wall-clock times")
}

/// The coins to fetch and chart, with their liquidity events and chart start
/// dates. Built once at startup and passed explicitly to the fetch/render
/// calls; iteration order is the charting order.
pub fn watchlist() -> Vec<CoinEntry> {
    vec![
        CoinEntry {
            coin_id: "simon-s-cat".to_string(),
            liquidity: LiquidityEvent {
                timestamp: market_time(2024, 9, 11, 12, 26),
                amount_usd: 900_000,
                label: "427K Views".to_string(),
                reference_price: Some(0.00002483),
            },
            chart_start: market_time(2024, 9, 7, 0, 0),
        },
        CoinEntry {
            coin_id: "why".to_string(),
            liquidity: LiquidityEvent {
                timestamp: market_time(2024, 7, 16, 13, 0),
                amount_usd: 200_000,
                label: "300.5K Views".to_string(),
                reference_price: Some(0.0000001724),
            },
            chart_start: market_time(2024, 7, 12, 0, 0),
        },
        CoinEntry {
            coin_id: "coco-coin".to_string(),
            liquidity: LiquidityEvent {
                timestamp: market_time(2024, 10, 8, 14, 1),
                amount_usd: 50_000,
                label: "136.5K Views".to_string(),
                reference_price: Some(0.001141),
            },
            chart_start: market_time(2024, 10, 8, 0, 0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchlist_start_precedes_liquidity() {
        for entry in watchlist() {
            assert!(
                entry.chart_start <= entry.liquidity.timestamp,
                "{} starts after its liquidity event",
                entry.coin_id
            );
        }
    }

    #[test]
    fn test_watchlist_ids_unique() {
        let entries = watchlist();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.coin_id, b.coin_id);
            }
        }
    }
}
