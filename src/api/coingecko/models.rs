use serde::Deserialize;
use thiserror::Error;

/// Success body of the market_chart/range endpoint.
///
/// `prices` is an ordered sequence of `[epoch_ms, price_usd]` pairs; the
/// upstream encodes the epoch milliseconds as a JSON number, so both slots
/// deserialize as f64.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<[f64; 2]>,
}

/// Errors from API operations.
///
/// A non-200 HTTP status is NOT an error: the client logs it and returns an
/// empty sample list so the caller skips the coin. These variants cover the
/// failures that abort the run instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to decode market chart body: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("sample timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),
}
