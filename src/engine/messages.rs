use std::time::Duration;

use crate::analysis::DashboardReport;
use crate::domain::DashboardParams;
use crate::error::PipelineError;

/// A request to run one fetch-and-recompute cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    /// Monotonic id so a late answer can never overwrite a newer one
    pub request_id: u64,
    pub params: DashboardParams,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub request_id: u64,
    pub params: DashboardParams,
    pub elapsed: Duration,

    // Success: the new front buffer
    // Failure: the classified error, formatted by the display layer
    pub result: Result<DashboardReport, PipelineError>,
}
