// Market data access: wire payloads, the REST client and the three-read fetch
pub mod client;
pub mod fetch;
pub mod payloads;

// Re-export commonly used types
pub use client::{MarketDataSource, SimcoClient};
pub use fetch::fetch_market_bundle;
pub use payloads::MarketBundle;
