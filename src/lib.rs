#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Fetch cycles and the displayed state
pub mod engine;

// Re-export commonly used types
pub use analysis::{DashboardReport, DivergenceProfile, run_pipeline};
pub use config::ApiConfig;
pub use data::{MarketDataSource, SimcoClient, fetch_market_bundle};
pub use domain::{DashboardParams, MarketInterval, MarketQuery};
pub use engine::FetchWorker;
pub use error::{PipelineError, Result};
pub use ui::SimcoBrokerApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the market API base URL (realm-scoped endpoints are appended to it)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Divergence threshold profile to start with
    #[arg(long, value_enum)]
    pub profile: Option<DivergenceProfile>,
}

impl Cli {
    pub fn profile_or_default(&self) -> DivergenceProfile {
        self.profile.unwrap_or(config::SIGNALS.default_profile)
    }
}

/// Logger at `Info` by default. A `RUST_LOG` spec, when given, is applied on top.
pub fn logger_builder(rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(spec) = rust_log {
        builder.parse_filters(spec);
    }
    builder
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    worker: FetchWorker,
    profile: DivergenceProfile,
) -> Box<dyn eframe::App> {
    let app = ui::SimcoBrokerApp::new(cc, worker, profile);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_flag_selects_thresholds() {
        let cli = Cli::parse_from(["simco-broker", "--profile", "wide"]);
        assert_eq!(cli.profile_or_default(), DivergenceProfile::Wide);

        let cli = Cli::parse_from(["simco-broker"]);
        assert_eq!(cli.profile_or_default(), DivergenceProfile::Tight);
    }

    #[test]
    fn rust_log_overrides_default_level() {
        assert_eq!(logger_builder(None).build().filter(), log::LevelFilter::Info);
        assert_eq!(
            logger_builder(Some("debug")).build().filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            logger_builder(Some("warn")).build().filter(),
            log::LevelFilter::Warn
        );
    }
}
