// Signal computation and chart-data preparation
pub mod divergence;
pub mod moving_average;
pub mod normalizer;
pub mod pipeline;
pub mod plot_assembly;

// Re-export commonly used types
pub use divergence::{DivergenceProfile, ThresholdBand, ThresholdTable, compute_divergence};
pub use moving_average::compute_sma;
pub use pipeline::{DashboardReport, run_pipeline};
pub use plot_assembly::assemble_plot;
