use crate::analysis::divergence::DivergenceProfile;
use crate::domain::interval::MarketInterval;
use crate::error::{PipelineError, Result};

/// Identifies one resource on one realm's market, plus the price-series interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarketQuery {
    pub realm_id: u32,
    pub resource_id: u32,
    pub quality: u32,
    pub interval: MarketInterval,
}

/// Overlay choices applied when the chart is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    pub show_vwap: bool,
    pub show_sma: bool,
    pub sma_window: usize,
}

/// Everything one fetch cycle needs, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardParams {
    pub query: MarketQuery,
    pub overlays: OverlayOptions,
    pub profile: DivergenceProfile,
}

/// Raw, unvalidated text from the parameter form.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamInputs {
    pub realm_id: String,
    pub resource_id: String,
    pub quality: String,
    pub interval: MarketInterval,
    pub show_vwap: bool,
    pub show_sma: bool,
    pub sma_window: String,
    pub profile: DivergenceProfile,
}

fn parse_id(field: &str, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        PipelineError::InvalidInput(format!(
            "{} must be a non-negative integer, got '{}'",
            field,
            raw.trim()
        ))
    })
}

impl ParamInputs {
    /// Validate the form. The SMA length is only checked when the overlay is enabled.
    pub fn validate(&self) -> Result<DashboardParams> {
        let query = MarketQuery {
            realm_id: parse_id("Realm ID", &self.realm_id)?,
            resource_id: parse_id("Resource ID", &self.resource_id)?,
            quality: parse_id("Quality", &self.quality)?,
            interval: self.interval,
        };

        let sma_window = if self.show_sma {
            match self.sma_window.trim().parse::<usize>() {
                Ok(window) if window >= 1 => window,
                _ => {
                    return Err(PipelineError::InvalidInput(format!(
                        "SMA length must be a positive integer, got '{}'",
                        self.sma_window.trim()
                    )));
                }
            }
        } else {
            self.sma_window.trim().parse::<usize>().unwrap_or(1).max(1)
        };

        Ok(DashboardParams {
            query,
            overlays: OverlayOptions {
                show_vwap: self.show_vwap,
                show_sma: self.show_sma,
                sma_window,
            },
            profile: self.profile,
        })
    }
}
