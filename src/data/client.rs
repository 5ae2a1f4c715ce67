// External crates
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tokio::time::{Duration, Instant};

// Local crates
use crate::config::ApiConfig;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::payloads::{PricesPayload, SummaryPayload, VwapsPayload};
use crate::domain::MarketQuery;
use crate::error::{Endpoint, FetchError};

/// A source of the three market payloads. `SimcoClient` talks to the real API;
/// anything else (fixtures, stubs) can stand in behind the same seam.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn price_series(&self, query: &MarketQuery) -> Result<PricesPayload, FetchError>;

    async fn vwaps(&self, query: &MarketQuery) -> Result<VwapsPayload, FetchError>;

    async fn market_summary(&self, query: &MarketQuery) -> Result<SummaryPayload, FetchError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub fn price_series_url(base_url: &str, query: &MarketQuery) -> String {
    format!(
        "{}{}/market/prices/{}/{}?interval={}",
        base_url,
        query.realm_id,
        query.resource_id,
        query.quality,
        query.interval.as_query()
    )
}

pub fn vwaps_url(base_url: &str, query: &MarketQuery) -> String {
    format!(
        "{}{}/market/vwaps/{}",
        base_url, query.realm_id, query.resource_id
    )
}

pub fn market_summary_url(base_url: &str, query: &MarketQuery) -> String {
    format!(
        "{}{}/market/resources/{}/{}",
        base_url, query.realm_id, query.resource_id, query.quality
    )
}

/// REST client for the SimCo market API.
pub struct SimcoClient {
    base_url: String,
    accept: &'static str,
    client: reqwest::Client,
}

impl SimcoClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.normalized_base_url();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            anyhow::bail!(
                "Invalid base_url: must start with http:// or https://, got: '{}'",
                base_url
            );
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("Failed to create HTTP client")?;

        log::info!(
            "Created SimcoClient: base_url='{}', timeout={}ms",
            base_url,
            config.timeout_ms
        );

        Ok(Self {
            base_url,
            accept: config.accept,
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: String,
    ) -> Result<T, FetchError> {
        let start = Instant::now();
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_timings {
            log::info!("GET {} ({})", url, endpoint);
        }

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, self.accept)
            .send()
            .await
            .map_err(|e| classify_transport_error(endpoint, e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            log::warn!("{} returned HTTP {} (url: {})", endpoint, status, url);
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(endpoint, e))?;

        log::info!("{} answered in {:?}", endpoint, start.elapsed());

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }
}

fn classify_transport_error(endpoint: Endpoint, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { endpoint }
    } else {
        FetchError::Transport {
            endpoint,
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl MarketDataSource for SimcoClient {
    async fn price_series(&self, query: &MarketQuery) -> Result<PricesPayload, FetchError> {
        self.get_json(Endpoint::Prices, price_series_url(&self.base_url, query))
            .await
    }

    async fn vwaps(&self, query: &MarketQuery) -> Result<VwapsPayload, FetchError> {
        self.get_json(Endpoint::Vwap, vwaps_url(&self.base_url, query))
            .await
    }

    async fn market_summary(&self, query: &MarketQuery) -> Result<SummaryPayload, FetchError> {
        self.get_json(Endpoint::Summary, market_summary_url(&self.base_url, query))
            .await
    }

    fn signature(&self) -> &'static str {
        "SimCo market API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketInterval;

    const BASE: &str = "https://api.simcotools.com/v1/realms/";

    fn query() -> MarketQuery {
        MarketQuery {
            realm_id: 0,
            resource_id: 42,
            quality: 3,
            interval: MarketInterval::OneWeek,
        }
    }

    #[test]
    fn urls_follow_the_realm_scoped_layout() {
        assert_eq!(
            price_series_url(BASE, &query()),
            "https://api.simcotools.com/v1/realms/0/market/prices/42/3?interval=1Sem"
        );
        assert_eq!(
            vwaps_url(BASE, &query()),
            "https://api.simcotools.com/v1/realms/0/market/vwaps/42"
        );
        assert_eq!(
            market_summary_url(BASE, &query()),
            "https://api.simcotools.com/v1/realms/0/market/resources/42/3"
        );
    }

    #[test]
    fn client_rejects_non_http_base_url() {
        let config = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            ..ApiConfig::default()
        };
        assert!(SimcoClient::new(&config).is_err());
    }
}
