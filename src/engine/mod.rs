pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use messages::{FetchOutcome, FetchRequest};
pub use state::DashboardState;
pub use worker::FetchWorker;
