use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::coingecko::CoinGeckoClient;
use services::{chart_service, metrics_service};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("liquichart=debug".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting liquichart...");

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Fetch and chart every watchlist coin, one at a time. A coin whose fetch
/// comes back empty is skipped; transport and rendering failures abort the
/// run.
async fn run() -> Result<(), String> {
    let client = CoinGeckoClient::new();
    let out_dir = Path::new(config::CHART_DIR);
    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("Failed to create {}: {}", out_dir.display(), e))?;

    for entry in config::watchlist() {
        info!("Fetching price history for {}...", entry.coin_id);
        let samples = client
            .market_chart_range(&entry.coin_id, entry.chart_start)
            .await
            .map_err(|e| format!("Fetch failed for {}: {}", entry.coin_id, e))?;

        let metrics = match metrics_service::compute(&samples, &entry.liquidity) {
            Some(m) => m,
            None => {
                info!("No price data for {}, skipping", entry.coin_id);
                continue;
            }
        };

        info!(
            "{}: current ${:.9}, peak ${:.9}, PnL {:.2}%, max PnL {:.2}%",
            entry.coin_id,
            metrics.current_price,
            metrics.max_price,
            metrics.pnl_percent,
            metrics.max_pnl_percent
        );

        let path = chart_service::render(
            &entry.coin_id,
            &samples,
            &entry.liquidity,
            &metrics,
            out_dir,
            config::CHART_WIDTH,
            config::CHART_HEIGHT,
        )?;
        info!("Chart written to {}", path.display());
    }

    Ok(())
}
