// Domain types and value objects
pub mod interval;
pub mod market_query;

// Re-export commonly used types
pub use interval::MarketInterval;
pub use market_query::{DashboardParams, MarketQuery, OverlayOptions, ParamInputs};
