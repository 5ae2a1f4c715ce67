use std::sync::Arc;

use crate::analysis::{DashboardReport, DivergenceProfile};
use crate::engine::messages::FetchOutcome;

/// What the dashboard currently shows. Only the UI thread writes to it.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// THE FRONT BUFFER.
    /// Replaced as a whole when a cycle succeeds, so summary, chart and
    /// recommendation always come from the same fetch.
    pub report: Option<Arc<DashboardReport>>,

    /// Classified one-line message of the last failed cycle (if any)
    pub last_error: Option<String>,

    /// Id of the cycle currently in flight
    pub pending_request: Option<u64>,
    next_request_id: u64,
}

impl DashboardState {
    /// Reserve an id for a new cycle. Returns None while another one is in flight.
    pub fn begin_request(&mut self) -> Option<u64> {
        if self.pending_request.is_some() {
            return None;
        }
        self.next_request_id += 1;
        self.pending_request = Some(self.next_request_id);
        Some(self.next_request_id)
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Validation failed before any request left; nothing is in flight.
    pub fn reject(&mut self, message: String) {
        self.last_error = Some(message);
    }

    /// Swap in a report derived from the one on screen (e.g. new thresholds).
    pub fn replace_report(&mut self, report: DashboardReport) {
        self.report = Some(Arc::new(report));
        self.last_error = None;
    }

    /// Apply a finished cycle. Answers for any id other than the pending one are dropped.
    /// `shown_profile` is the threshold profile currently selected; a report computed
    /// with another one is reclassified before the swap.
    /// Returns true if the outcome was applied.
    pub fn apply(&mut self, outcome: FetchOutcome, shown_profile: DivergenceProfile) -> bool {
        if self.pending_request != Some(outcome.request_id) {
            log::warn!(
                "Dropping stale outcome #{} (pending: {:?})",
                outcome.request_id,
                self.pending_request
            );
            return false;
        }
        self.pending_request = None;

        let result = outcome.result.and_then(|report| {
            if outcome.params.profile == shown_profile {
                Ok(report)
            } else {
                log::info!(
                    "Cycle #{} ran with {}, reclassifying with {}",
                    outcome.request_id,
                    outcome.params.profile,
                    shown_profile
                );
                report.reclassify(&shown_profile.table())
            }
        });

        match result {
            Ok(report) => {
                // THIS IS THE SWAP.
                self.report = Some(Arc::new(report));
                self.last_error = None;
            }
            Err(e) => {
                // Prior chart and summary stay on screen
                self.last_error = Some(e.user_message());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_pipeline;
    use crate::models::RecommendationTier;
    use crate::domain::{DashboardParams, MarketInterval, MarketQuery, OverlayOptions};
    use crate::error::PipelineError;
    use crate::models::PlotSpec;
    use std::time::Duration;

    fn params() -> DashboardParams {
        DashboardParams {
            query: MarketQuery {
                realm_id: 0,
                resource_id: 1,
                quality: 0,
                interval: MarketInterval::OneHour,
            },
            overlays: OverlayOptions {
                show_vwap: false,
                show_sma: false,
                sma_window: 1,
            },
            profile: DivergenceProfile::Tight,
        }
    }

    fn report(point_count: usize) -> DashboardReport {
        let closes = vec![100.0; point_count];
        let source = crate::data::fetch::tests::StubSource::healthy(100.0, &closes);
        let bundle = crate::data::MarketBundle {
            prices: source.prices.unwrap(),
            vwaps: source.vwaps.unwrap(),
            summary: source.summary.unwrap(),
        };
        run_pipeline(&bundle, &params().overlays, &DivergenceProfile::Tight.table()).unwrap()
    }

    fn outcome(id: u64, result: Result<DashboardReport, PipelineError>) -> FetchOutcome {
        FetchOutcome {
            request_id: id,
            params: params(),
            elapsed: Duration::from_millis(5),
            result,
        }
    }

    #[test]
    fn only_one_cycle_in_flight() {
        let mut state = DashboardState::default();
        let first = state.begin_request();
        assert_eq!(first, Some(1));
        assert_eq!(state.begin_request(), None);
        assert!(state.is_fetching());
    }

    #[test]
    fn success_swaps_whole_report() {
        let mut state = DashboardState::default();
        let id = state.begin_request().unwrap();
        assert!(state.apply(outcome(id, Ok(report(3))), DivergenceProfile::Tight));
        assert!(!state.is_fetching());
        assert_eq!(state.report.as_ref().unwrap().plot.point_count, 3);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn failure_keeps_previous_report_and_sets_message() {
        let mut state = DashboardState::default();
        let id = state.begin_request().unwrap();
        state.apply(outcome(id, Ok(report(4))), DivergenceProfile::Tight);

        let id = state.begin_request().unwrap();
        state.apply(
            outcome(id, Err(PipelineError::DivisionByZero)),
            DivergenceProfile::Tight,
        );

        assert_eq!(state.report.as_ref().unwrap().plot.point_count, 4);
        assert_eq!(
            state.last_error.as_deref(),
            Some(PipelineError::DivisionByZero.user_message().as_str())
        );
        assert_ne!(state.report.as_ref().unwrap().plot, PlotSpec::default());
    }

    #[test]
    fn stale_outcome_is_dropped() {
        let mut state = DashboardState::default();
        let id = state.begin_request().unwrap();
        assert!(!state.apply(outcome(id + 10, Ok(report(2))), DivergenceProfile::Tight));
        assert!(state.is_fetching());
        assert!(state.report.is_none());
    }

    #[test]
    fn replaced_report_clears_error() {
        let mut state = DashboardState::default();
        state.reject("bad input".to_string());
        state.replace_report(report(2));
        assert!(state.last_error.is_none());
        assert_eq!(state.report.as_ref().unwrap().plot.point_count, 2);
    }

    #[test]
    fn report_from_old_profile_is_reclassified_for_the_shown_one() {
        // 105 against closes averaging 100: Sell when tight, Neutral when wide
        let source = crate::data::fetch::tests::StubSource::healthy(
            105.0,
            &[98.0, 99.0, 100.0, 101.0, 102.0],
        );
        let bundle = crate::data::MarketBundle {
            prices: source.prices.unwrap(),
            vwaps: source.vwaps.unwrap(),
            summary: source.summary.unwrap(),
        };
        let tight_report =
            run_pipeline(&bundle, &params().overlays, &DivergenceProfile::Tight.table()).unwrap();
        assert_eq!(tight_report.divergence.tier, RecommendationTier::Sell);

        // Cycle started with Tight, user switched to Wide while it was in flight
        let mut state = DashboardState::default();
        let id = state.begin_request().unwrap();
        assert!(state.apply(outcome(id, Ok(tight_report)), DivergenceProfile::Wide));

        let shown = state.report.as_ref().unwrap();
        assert_eq!(shown.divergence.tier, RecommendationTier::Neutral);
        assert!(shown.summary.ends_with("Neutral"));
    }
}
