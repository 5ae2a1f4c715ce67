//! One fetch-and-recompute cycle, from payloads to the text summary and chart.

use crate::analysis::divergence::{ThresholdTable, compute_divergence};
use crate::analysis::plot_assembly::assemble_plot;
use crate::data::MarketBundle;
use crate::domain::OverlayOptions;
use crate::error::Result;
use crate::models::{DivergenceResult, MarketSnapshot, PlotSpec};
use crate::config::REPORT_TEXT;
use crate::utils::format_utils::format_price;
use crate::utils::time_utils::format_timestamp;

/// Everything the display layer needs after a successful cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub snapshot: MarketSnapshot,
    pub plot: PlotSpec,
    pub divergence: DivergenceResult,
    pub summary: String,
}

/// Snapshot, then chart, then divergence. The first failing stage aborts the cycle.
pub fn run_pipeline(
    bundle: &MarketBundle,
    overlays: &OverlayOptions,
    table: &ThresholdTable,
) -> Result<DashboardReport> {
    let snapshot = MarketSnapshot::from_bundle(bundle)?;
    let plot = assemble_plot(&snapshot, overlays)?;
    let divergence = compute_divergence(snapshot.price, &snapshot.close_prices(), table)?;

    log::info!(
        "Cycle done: {} points, divergence {:.2}% -> {}",
        plot.point_count,
        divergence.divergence_pct,
        divergence.tier
    );

    let summary = summary_text(&snapshot, &divergence);
    Ok(DashboardReport {
        snapshot,
        plot,
        divergence,
        summary,
    })
}

impl DashboardReport {
    /// Same snapshot and chart, classified against another threshold table.
    pub fn reclassify(&self, table: &ThresholdTable) -> Result<DashboardReport> {
        let divergence =
            compute_divergence(self.snapshot.price, &self.snapshot.close_prices(), table)?;
        Ok(DashboardReport {
            snapshot: self.snapshot.clone(),
            plot: self.plot.clone(),
            summary: summary_text(&self.snapshot, &divergence),
            divergence,
        })
    }
}

pub fn summary_text(snapshot: &MarketSnapshot, divergence: &DivergenceResult) -> String {
    format!(
        "{}{} | {}{} | {}{}\n{}{}\n{}{:.2}% | {}{}",
        REPORT_TEXT.summary_price,
        format_price(snapshot.price),
        REPORT_TEXT.summary_vwap,
        format_price(snapshot.vwap),
        REPORT_TEXT.summary_volume,
        snapshot.volume,
        REPORT_TEXT.summary_last_update,
        format_timestamp(&snapshot.timestamp),
        REPORT_TEXT.summary_divergence,
        divergence.divergence_pct,
        REPORT_TEXT.summary_recommendation,
        divergence.tier
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::divergence::DivergenceProfile;
    use crate::data::fetch::fetch_market_bundle;
    use crate::data::fetch::tests::{StubSource, query};
    use crate::error::PipelineError;
    use crate::models::RecommendationTier;

    fn overlays() -> OverlayOptions {
        OverlayOptions {
            show_vwap: true,
            show_sma: true,
            sma_window: 3,
        }
    }

    #[tokio::test]
    async fn end_to_end_five_closes_with_sma() {
        let source = StubSource::healthy(105.0, &[98.0, 99.0, 100.0, 101.0, 102.0]);
        let bundle = fetch_market_bundle(&source, &query()).await.unwrap();

        let tight = run_pipeline(&bundle, &overlays(), &DivergenceProfile::Tight.table()).unwrap();
        let sma = tight.plot.sma_line.as_ref().unwrap();
        assert_eq!(sma.line.y, vec![99.0, 100.0, 101.0]);
        assert_eq!(sma.line.x, tight.plot.series.x[2..].to_vec());
        assert!((tight.divergence.divergence_pct - 5.0).abs() < 1e-9);
        assert_eq!(tight.divergence.tier, RecommendationTier::Sell);
        assert!(tight.summary.contains("5.00%"));
        assert!(tight.summary.contains("Sell"));

        let wide = run_pipeline(&bundle, &overlays(), &DivergenceProfile::Wide.table()).unwrap();
        assert_eq!(wide.divergence.tier, RecommendationTier::Neutral);
    }

    #[tokio::test]
    async fn reclassify_keeps_snapshot_and_chart() {
        let source = StubSource::healthy(105.0, &[98.0, 99.0, 100.0, 101.0, 102.0]);
        let bundle = fetch_market_bundle(&source, &query()).await.unwrap();
        let tight = run_pipeline(&bundle, &overlays(), &DivergenceProfile::Tight.table()).unwrap();

        let wide = tight.reclassify(&DivergenceProfile::Wide.table()).unwrap();
        assert_eq!(wide.snapshot, tight.snapshot);
        assert_eq!(wide.plot, tight.plot);
        assert_eq!(wide.divergence.tier, RecommendationTier::Neutral);
        assert!(wide.summary.ends_with("Neutral"));
    }

    #[tokio::test]
    async fn empty_close_list_fails_explicitly() {
        let source = StubSource::healthy(105.0, &[]);
        let bundle = fetch_market_bundle(&source, &query()).await.unwrap();
        let err = run_pipeline(&bundle, &overlays(), &DivergenceProfile::Tight.table())
            .unwrap_err();
        assert_eq!(
            err,
            PipelineError::InsufficientData {
                needed: 1,
                available: 0
            }
        );
    }

    #[tokio::test]
    async fn malformed_close_datetime_produces_no_report() {
        let mut source = StubSource::healthy(105.0, &[98.0, 99.0, 100.0]);
        if let Ok(summary) = source.summary.as_mut() {
            summary.summary.latest_close_prices[1].datetime = "31/02/2024".to_string();
        }
        let bundle = fetch_market_bundle(&source, &query()).await.unwrap();
        assert!(matches!(
            run_pipeline(&bundle, &overlays(), &DivergenceProfile::Tight.table()),
            Err(PipelineError::Parse(_))
        ));
    }

    #[test]
    fn summary_has_three_lines() {
        let snapshot = MarketSnapshot {
            price: 12.0,
            timestamp: crate::utils::time_utils::parse_api_datetime("2024-05-01T15:04:00Z")
                .unwrap(),
            vwap: 11.5,
            volume: 320.0,
            close_series: Vec::new(),
        };
        let divergence = DivergenceResult {
            divergence_pct: -4.256,
            tier: RecommendationTier::Buy,
        };
        let text = summary_text(&snapshot, &divergence);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("$12.0000"));
        assert!(lines[0].contains("320"));
        assert_eq!(lines[1], format!("{}2024-05-01 15:04:00 UTC", REPORT_TEXT.summary_last_update));
        assert!(lines[2].contains("-4.26%"));
        assert!(lines[2].ends_with("Buy"));
    }
}
