use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use super::messages::{FetchOutcome, FetchRequest};
use crate::analysis::run_pipeline;
use crate::data::{MarketDataSource, fetch_market_bundle};

/// Runs fetch cycles to completion on the caller's thread, driving the async
/// reads on a shared Tokio runtime.
#[derive(Clone)]
pub struct FetchWorker {
    source: Arc<dyn MarketDataSource>,
    runtime: Handle,
}

impl FetchWorker {
    pub fn new(source: Arc<dyn MarketDataSource>, runtime: Handle) -> Self {
        Self { source, runtime }
    }

    pub fn signature(&self) -> &'static str {
        self.source.signature()
    }

    /// Blocking. Must not be called from inside the runtime's own worker threads.
    pub fn run(&self, request: FetchRequest) -> FetchOutcome {
        let start = Instant::now();
        let params = request.params;

        let result = self.runtime.block_on(async {
            let bundle = fetch_market_bundle(self.source.as_ref(), &params.query).await?;
            run_pipeline(&bundle, &params.overlays, &params.profile.table())
        });

        if let Err(e) = &result {
            log::error!("❌ Fetch cycle #{} failed: {}", request.request_id, e);
        }

        FetchOutcome {
            request_id: request.request_id,
            params,
            elapsed: start.elapsed(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DivergenceProfile;
    use crate::data::fetch::tests::{StubSource, query};
    use crate::domain::{DashboardParams, OverlayOptions};
    use crate::error::{Endpoint, FetchError, PipelineError};

    fn request(id: u64) -> FetchRequest {
        FetchRequest {
            request_id: id,
            params: DashboardParams {
                query: query(),
                overlays: OverlayOptions {
                    show_vwap: true,
                    show_sma: false,
                    sma_window: 5,
                },
                profile: DivergenceProfile::Tight,
            },
        }
    }

    #[test]
    fn worker_runs_full_cycle_from_a_plain_thread() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let worker = FetchWorker::new(
            Arc::new(StubSource::healthy(100.0, &[100.0, 100.0])),
            runtime.handle().clone(),
        );

        let outcome = std::thread::spawn(move || worker.run(request(7)))
            .join()
            .unwrap();
        assert_eq!(outcome.request_id, 7);
        let report = outcome.result.unwrap();
        assert_eq!(report.plot.point_count, 2);
        assert_eq!(report.divergence.divergence_pct, 0.0);
    }

    #[test]
    fn fetch_failure_skips_the_computation() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut source = StubSource::healthy(100.0, &[100.0]);
        source.prices = Err(FetchError::Status {
            endpoint: Endpoint::Prices,
            status: 503,
        });
        let worker = FetchWorker::new(Arc::new(source), runtime.handle().clone());

        let outcome = worker.run(request(1));
        assert!(matches!(outcome.result, Err(PipelineError::Fetch(_))));
    }
}
