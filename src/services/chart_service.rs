//! Annotated price chart rendering with plotters

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::models::{ChartMetrics, LiquidityEvent, PricePoint};
use crate::utils::{display_name, format_thousands};

const LIGHT_GREY: RGBColor = RGBColor(211, 211, 211);
const GREY: RGBColor = RGBColor(128, 128, 128);

/// Color for a PnL figure: non-negative green, negative red
fn pnl_color(pnl: f64) -> RGBColor {
    if pnl >= 0.0 {
        GREEN
    } else {
        RED
    }
}

/// Render one coin's chart as a PNG under `out_dir` and return its path.
///
/// Draws the price line, a dashed vertical marker at the liquidity event,
/// text annotations for the liquidity post, current price, PnL% and Max PnL%,
/// and a marker at the peak price. `samples` must be non-empty; callers skip
/// coins whose fetch came back empty.
pub fn render(
    coin_id: &str,
    samples: &[PricePoint],
    event: &LiquidityEvent,
    metrics: &ChartMetrics,
    out_dir: &Path,
    width: u32,
    height: u32,
) -> Result<PathBuf, String> {
    if samples.is_empty() {
        return Err(format!("No samples to chart for {}", coin_id));
    }

    let name = display_name(coin_id);
    let out_path = out_dir.join(format!("{}.png", coin_id));

    // Plot against wall-clock time in the market zone.
    let points: Vec<(NaiveDateTime, f64)> = samples
        .iter()
        .map(|s| (s.timestamp.naive_local(), s.price))
        .collect();

    let x_min = points[0].0;
    let x_max = points[points.len() - 1].0;
    let y_max = metrics.max_price * 1.15;

    // Backend borrows the output path, so keep it scoped.
    {
        let root = BitMapBackend::new(&out_path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Historical Prices of {}", name),
                ("sans-serif", 32.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(RangedDateTime::from(x_min..x_max), 0.0..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .bold_line_style(&LIGHT_GREY)
            .light_line_style(&WHITE)
            .x_label_formatter(&|x: &NaiveDateTime| x.format("%Y-%m-%d").to_string())
            .y_label_formatter(&|y: &f64| format!("{:.9}", y))
            .x_desc("Date")
            .y_desc("Price (USD)")
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(points.iter().cloned(), &BLUE))
            .map_err(|e| format!("Failed to draw price line: {}", e))?
            .label(name)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| format!("Failed to draw legend: {}", e))?;

        // Dashed vertical marker at the liquidity event
        let liquidity_x = event.timestamp.naive_local();
        chart
            .draw_series(DashedLineSeries::new(
                vec![(liquidity_x, 0.0), (liquidity_x, y_max)],
                6,
                4,
                ShapeStyle::from(&GREY),
            ))
            .map_err(|e| format!("Failed to draw liquidity marker: {}", e))?;

        let current_x = points[points.len() - 1].0;
        let max_x = metrics.max_price_at.naive_local();
        let m = metrics.max_price;

        let annotations = [
            (
                liquidity_x,
                m * 0.90,
                format!(
                    "Liquidity: ${} ({}) @ ${:.9}",
                    format_thousands(event.amount_usd),
                    event.label,
                    metrics.liquidity_price
                ),
                BLACK,
                HPos::Right,
            ),
            (
                current_x,
                m * 0.95,
                format!("Current: ${:.9}", metrics.current_price),
                BLACK,
                HPos::Left,
            ),
            (
                current_x,
                m * 0.85,
                format!("PnL: {:.2}%", metrics.pnl_percent),
                pnl_color(metrics.pnl_percent),
                HPos::Left,
            ),
            (
                current_x,
                m * 0.75,
                format!("Max PnL: {:.2}%", metrics.max_pnl_percent),
                pnl_color(metrics.max_pnl_percent),
                HPos::Left,
            ),
            (
                max_x,
                m * 1.05,
                format!("Max: ${:.9}", metrics.max_price),
                GREEN,
                HPos::Center,
            ),
        ];

        for (x, y, text, color, anchor) in annotations {
            let style = ("sans-serif", 14)
                .into_font()
                .color(&color)
                .pos(Pos::new(anchor, VPos::Center));
            chart
                .draw_series(std::iter::once(Text::new(text, (x, y), style)))
                .map_err(|e| format!("Failed to draw annotation: {}", e))?;
        }

        // Point marker at the peak itself
        chart
            .draw_series(std::iter::once(Circle::new(
                (max_x, metrics.max_price),
                4,
                GREEN.filled(),
            )))
            .map_err(|e| format!("Failed to draw peak marker: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARKET_TZ;
    use crate::services::metrics_service;
    use chrono::TimeZone;

    #[test]
    fn test_pnl_color_sign() {
        assert_eq!(pnl_color(20.82), GREEN);
        assert_eq!(pnl_color(0.0), GREEN);
        assert_eq!(pnl_color(-0.01), RED);
    }

    #[test]
    fn test_render_writes_png() {
        let start = MARKET_TZ
            .with_ymd_and_hms(2024, 9, 7, 0, 0, 0)
            .single()
            .expect("valid time");
        let samples: Vec<PricePoint> = (0..48)
            .map(|i| PricePoint {
                timestamp: start + chrono::Duration::hours(i),
                price: 0.00002483 + 0.0000001 * (i as f64),
            })
            .collect();
        let event = LiquidityEvent {
            timestamp: MARKET_TZ
                .with_ymd_and_hms(2024, 9, 7, 12, 26, 0)
                .single()
                .expect("valid time"),
            amount_usd: 900_000,
            label: "427K Views".to_string(),
            reference_price: Some(0.00002483),
        };
        let metrics = metrics_service::compute(&samples, &event).expect("non-empty series");

        let out_dir = std::env::temp_dir().join("liquichart_test_render");
        std::fs::create_dir_all(&out_dir).expect("create temp dir");

        let path = render(
            "simon-s-cat",
            &samples,
            &event,
            &metrics,
            &out_dir,
            640,
            360,
        )
        .expect("render failed");

        let bytes = std::fs::read(&path).expect("read chart file");
        assert!(!bytes.is_empty());
        // PNG magic
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_rejects_empty_series() {
        let event = LiquidityEvent {
            timestamp: MARKET_TZ
                .with_ymd_and_hms(2024, 9, 7, 12, 26, 0)
                .single()
                .expect("valid time"),
            amount_usd: 1,
            label: String::new(),
            reference_price: None,
        };
        let metrics = ChartMetrics {
            current_price: 0.0,
            max_price: 0.0,
            max_price_at: event.timestamp,
            liquidity_price: 0.0,
            pnl_percent: 0.0,
            max_pnl_percent: 0.0,
        };
        assert!(render(
            "why",
            &[],
            &event,
            &metrics,
            Path::new("/tmp"),
            640,
            360
        )
        .is_err());
    }
}
