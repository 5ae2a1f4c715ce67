use std::fmt;

use thiserror::Error;

use crate::config::REPORT_TEXT;

/// The three market endpoints queried on every fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Endpoint {
    #[strum(to_string = "price series")]
    Prices,
    #[strum(to_string = "vwap")]
    Vwap,
    #[strum(to_string = "market summary")]
    Summary,
}

/// Failure of a single read against the market API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{endpoint} request returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("{endpoint} request timed out")]
    Timeout { endpoint: Endpoint },

    #[error("{endpoint} request failed: {message}")]
    Transport { endpoint: Endpoint, message: String },

    #[error("{endpoint} payload could not be decoded: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Status { endpoint, .. }
            | FetchError::Timeout { endpoint }
            | FetchError::Transport { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => *endpoint,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// The endpoint answered 200 but its payload did not have the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }

    /// HTTP status behind the failure, if the server answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Every failed read of one fetch cycle. Never empty when constructed by the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub failures: Vec<FetchError>,
}

impl FetchFailure {
    pub fn new(failures: Vec<FetchError>) -> Self {
        Self { failures }
    }

    pub fn failed_endpoints(&self) -> Vec<Endpoint> {
        self.failures.iter().map(FetchError::endpoint).collect()
    }

    /// True when every failed read was a timeout.
    pub fn only_timeouts(&self) -> bool {
        !self.failures.is_empty() && self.failures.iter().all(FetchError::is_timeout)
    }

    /// True when every failed read reached the API and only the payload was wrong.
    pub fn only_decode_errors(&self) -> bool {
        !self.failures.is_empty() && self.failures.iter().all(FetchError::is_decode)
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.failures.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Error kinds of one fetch-and-recompute cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("market data fetch failed: {0}")]
    Fetch(FetchFailure),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("insufficient data: need {needed} values, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("average close price is zero")]
    DivisionByZero,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<FetchFailure> for PipelineError {
    fn from(failure: FetchFailure) -> Self {
        PipelineError::Fetch(failure)
    }
}

impl PipelineError {
    /// The single line shown to the user. The full error goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Fetch(failure) if failure.only_timeouts() => {
                REPORT_TEXT.error_timeout.to_string()
            }
            PipelineError::Fetch(_) => REPORT_TEXT.error_fetch.to_string(),
            PipelineError::Parse(_) => REPORT_TEXT.error_parse.to_string(),
            PipelineError::InsufficientData { .. } | PipelineError::DivisionByZero => {
                format!("{}{}", REPORT_TEXT.error_calculation_prefix, self)
            }
            PipelineError::InvalidInput(msg) => {
                format!("{}{}", REPORT_TEXT.error_invalid_input_prefix, msg)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_surfaces_generic_message_but_keeps_statuses() {
        let err = PipelineError::from(FetchFailure::new(vec![
            FetchError::Status {
                endpoint: Endpoint::Vwap,
                status: 404,
            },
            FetchError::Timeout {
                endpoint: Endpoint::Summary,
            },
        ]));

        assert_eq!(err.user_message(), REPORT_TEXT.error_fetch);
        let PipelineError::Fetch(failure) = &err else {
            panic!("expected fetch error");
        };
        assert_eq!(
            failure.failed_endpoints(),
            vec![Endpoint::Vwap, Endpoint::Summary]
        );
        assert_eq!(failure.failures[0].http_status(), Some(404));
        assert!(err.to_string().contains("vwap request returned HTTP 404"));
    }

    #[test]
    fn timeout_only_failure_has_its_own_message() {
        let err = PipelineError::from(FetchFailure::new(vec![FetchError::Timeout {
            endpoint: Endpoint::Prices,
        }]));
        assert_eq!(err.user_message(), REPORT_TEXT.error_timeout);
    }

    #[test]
    fn calculation_errors_are_prefixed() {
        let msg = PipelineError::DivisionByZero.user_message();
        assert!(msg.starts_with(REPORT_TEXT.error_calculation_prefix));
        assert!(msg.ends_with("average close price is zero"));
    }
}
