//! SimCo market API configuration constants and types.

use crate::Cli;

/// Configuration for the market REST client
/// (This is the runtime struct handed to the Http Client)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub accept: &'static str,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: SIMCO.base_url.to_string(),
            accept: SIMCO.accept,
            timeout_ms: SIMCO.client.timeout_ms,
        }
    }
}

impl ApiConfig {
    /// Defaults with any command-line overrides applied on top.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = &cli.api_base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = cli.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        config
    }

    /// Base URL guaranteed to end with exactly one '/'.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim().trim_end_matches('/'))
    }
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    /// Per-request timeout. Each of the three reads gets its own budget.
    pub timeout_ms: u64,
}

/// The Master API Configuration
pub struct SimcoApiConfig {
    /// Realm-scoped root; realm id and path follow directly
    pub base_url: &'static str,
    pub accept: &'static str,
    pub client: ClientDefaults,
}

pub const SIMCO: SimcoApiConfig = SimcoApiConfig {
    base_url: "https://api.simcotools.com/v1/realms/",
    accept: "application/json",
    client: ClientDefaults { timeout_ms: 10_000 },
};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_replace_defaults() {
        let cli = Cli::parse_from([
            "simco-broker",
            "--api-base-url",
            "http://localhost:8080/realms",
            "--timeout-ms",
            "250",
        ]);
        let config = ApiConfig::from_cli(&cli);
        assert_eq!(config.base_url, "http://localhost:8080/realms");
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.normalized_base_url(), "http://localhost:8080/realms/");
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let cli = Cli::parse_from(["simco-broker"]);
        assert_eq!(ApiConfig::from_cli(&cli), ApiConfig::default());
        assert_eq!(
            ApiConfig::default().normalized_base_url(),
            "https://api.simcotools.com/v1/realms/"
        );
    }
}
