use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client as HttpClient;
use tracing::warn;

use super::models::{ApiError, MarketChartResponse};
use crate::config::MARKET_TZ;
use crate::models::PricePoint;

/// CoinGecko API client for historical price ranges
pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// Create a new CoinGecko API client
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Fetch the USD price series for `coin_id` from `start` up to now.
    ///
    /// One synchronous GET against the range endpoint. A non-200 status is
    /// logged with the coin id, status code, and body text, and yields an
    /// empty series; the caller treats empty as "skip this coin". No retry,
    /// no backoff.
    pub async fn market_chart_range(
        &self,
        coin_id: &str,
        start: DateTime<Tz>,
    ) -> Result<Vec<PricePoint>, ApiError> {
        let now = Utc::now().with_timezone(&MARKET_TZ);
        let (from, to) = range_bounds(start, now);

        let url = format!("{}/coins/{}/market_chart/range", self.base_url, coin_id);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("vs_currency", "usd".to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        samples_from_response(coin_id, status, &body)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix-second query bounds for the range endpoint
pub fn range_bounds(start: DateTime<Tz>, now: DateTime<Tz>) -> (i64, i64) {
    (start.timestamp(), now.timestamp())
}

/// Map an HTTP response to a sample series.
///
/// Exactly 200 counts as success; everything else is a skip, not an error.
fn samples_from_response(
    coin_id: &str,
    status: u16,
    body: &str,
) -> Result<Vec<PricePoint>, ApiError> {
    if status != 200 {
        warn!(
            "Failed to fetch data for {}: {} {}",
            coin_id, status, body
        );
        return Ok(Vec::new());
    }
    parse_market_chart(body)
}

/// Parse a success body into chronological price points in the market time
/// zone. Order is taken as returned by the API; no reordering.
fn parse_market_chart(body: &str) -> Result<Vec<PricePoint>, ApiError> {
    let parsed: MarketChartResponse = serde_json::from_str(body)?;

    let mut samples = Vec::with_capacity(parsed.prices.len());
    for [epoch_ms, price] in parsed.prices {
        let epoch_ms = epoch_ms as i64;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(epoch_ms)
            .ok_or(ApiError::TimestampOutOfRange(epoch_ms))?
            .with_timezone(&MARKET_TZ);
        samples.push(PricePoint { timestamp, price });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_not_found_yields_empty() {
        let samples = samples_from_response("simon-s-cat", 404, "{\"error\":\"coin not found\"}")
            .expect("404 must not be an error");
        assert!(samples.is_empty());
    }

    #[test]
    fn test_server_error_yields_empty() {
        let samples = samples_from_response("why", 500, "internal server error")
            .expect("500 must not be an error");
        assert!(samples.is_empty());
    }

    #[test]
    fn test_parse_market_chart_keeps_order_and_zone() {
        let body = r#"{"prices":[[1725694800000,0.00002483],[1725698400000,0.00002520]]}"#;
        let samples = samples_from_response("simon-s-cat", 200, body).expect("parse failed");

        assert_eq!(samples.len(), 2);
        assert!((samples[0].price - 0.00002483).abs() < 1e-12);
        assert!((samples[1].price - 0.00002520).abs() < 1e-12);
        assert!(samples[0].timestamp < samples[1].timestamp);
        assert_eq!(samples[0].timestamp.timezone(), MARKET_TZ);
        assert_eq!(samples[0].timestamp.timestamp_millis(), 1725694800000);
    }

    #[test]
    fn test_parse_market_chart_rejects_malformed_body() {
        let err = samples_from_response("coco-coin", 200, "not json");
        assert!(matches!(err, Err(ApiError::Deserialization(_))));
    }

    #[test]
    fn test_range_bounds_match_query_contract() {
        let start = MARKET_TZ
            .with_ymd_and_hms(2024, 9, 7, 0, 0, 0)
            .single()
            .expect("valid time");
        let now = Utc::now().with_timezone(&MARKET_TZ);

        let (from, to) = range_bounds(start, now);
        assert_eq!(from, start.timestamp());
        assert!((to - Utc::now().timestamp()).abs() <= 5);
    }
}
