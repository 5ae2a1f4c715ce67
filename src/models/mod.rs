// Domain models for the market dashboard
// These modules contain plain data independent of UI/visualization

pub mod plot_spec;
pub mod signal;
pub mod snapshot;

// Re-export key types for convenience
pub use plot_spec::{PlotSpec, SeriesLine, SmaOverlay};
pub use signal::{DivergenceResult, RecommendationTier};
pub use snapshot::{ClosePricePoint, MarketSnapshot, PricePoint};
