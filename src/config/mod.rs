//! Configuration module for the SimCo broker dashboard.

pub mod api;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;
pub mod report_text;
pub mod signals;

// Re-export commonly used items
pub use api::{ApiConfig, SIMCO};
pub use plot::PLOT_CONFIG;
pub use report_text::REPORT_TEXT;
pub use signals::SIGNALS;
