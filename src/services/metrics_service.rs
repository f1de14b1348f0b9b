//! Derived chart metrics: current price, peak price, liquidity-event PnL

use crate::models::{ChartMetrics, LiquidityEvent, PricePoint};

/// Percentage change of `price` relative to `reference`.
///
/// The reference is not guarded against zero; a zero reference yields an
/// infinite percentage, which carries through to the rendered text.
pub fn pnl_percent(price: f64, reference: f64) -> f64 {
    (price - reference) / reference * 100.0
}

/// Resolve the PnL baseline: the event's recorded price when present and
/// non-zero, else the last sample's price.
pub fn resolve_liquidity_price(reference_price: Option<f64>, samples: &[PricePoint]) -> f64 {
    match reference_price {
        Some(price) if price != 0.0 => price,
        _ => samples.last().map(|s| s.price).unwrap_or(0.0),
    }
}

/// Compute the metrics displayed on one chart. Returns `None` for an empty
/// series; callers skip those coins before rendering.
pub fn compute(samples: &[PricePoint], event: &LiquidityEvent) -> Option<ChartMetrics> {
    let last = samples.last()?;

    // First sample attaining the maximum wins ties.
    let mut max_idx = 0;
    for (i, sample) in samples.iter().enumerate() {
        if sample.price > samples[max_idx].price {
            max_idx = i;
        }
    }
    let max_sample = &samples[max_idx];

    let liquidity_price = resolve_liquidity_price(event.reference_price, samples);

    Some(ChartMetrics {
        current_price: last.price,
        max_price: max_sample.price,
        max_price_at: max_sample.timestamp,
        liquidity_price,
        pnl_percent: pnl_percent(last.price, liquidity_price),
        max_pnl_percent: pnl_percent(max_sample.price, liquidity_price),
    })
}
