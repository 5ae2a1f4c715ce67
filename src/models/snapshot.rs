use chrono::{DateTime, Utc};

use crate::analysis::normalizer::{self, NormalizedSeries};
use crate::data::payloads::MarketBundle;
use crate::error::{PipelineError, Result};
use crate::utils::time_utils::parse_api_datetime;

/// One entry of the price-series endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// One entry of the summary's `latestClosePrices`, in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosePricePoint {
    pub timestamp: DateTime<Utc>,
    pub close_price: f64,
}

/// Merged view of one fetch cycle. Built fresh per fetch and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub price: f64,
    pub timestamp: DateTime<Utc>,
    pub vwap: f64,
    pub volume: f64,
    pub close_series: Vec<ClosePricePoint>,
}

pub(crate) fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PipelineError::Parse(format!("{} is not a finite number", field)))
    }
}

impl MarketSnapshot {
    /// The current price is the first entry of the price series, the VWAP the first VWAP entry.
    pub fn from_bundle(bundle: &MarketBundle) -> Result<Self> {
        let latest = bundle
            .prices
            .prices
            .first()
            .ok_or_else(|| PipelineError::Parse("price series is empty".to_string()))?;
        let current = PricePoint {
            timestamp: parse_api_datetime(&latest.datetime).ok_or_else(|| {
                PipelineError::Parse(format!("invalid price datetime '{}'", latest.datetime))
            })?,
            price: require_finite("price", latest.price)?,
        };

        let vwap = bundle
            .vwaps
            .vwaps
            .first()
            .ok_or_else(|| PipelineError::Parse("vwap list is empty".to_string()))?
            .vwap;

        let summary = &bundle.summary.summary;

        Ok(Self {
            price: current.price,
            timestamp: current.timestamp,
            vwap: require_finite("vwap", vwap)?,
            volume: require_finite("volume", summary.volume)?,
            close_series: normalizer::parse_close_series(&summary.latest_close_prices)?,
        })
    }

    pub fn close_prices(&self) -> Vec<f64> {
        self.close_series.iter().map(|p| p.close_price).collect()
    }

    /// Parallel numeric axes of the close series.
    pub fn close_axis(&self) -> NormalizedSeries {
        NormalizedSeries::from_points(&self.close_series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::payloads::{
        ClosePriceEntry, MarketSummary, PriceEntry, PricesPayload, SummaryPayload, VwapEntry,
        VwapsPayload,
    };

    fn bundle() -> MarketBundle {
        MarketBundle {
            prices: PricesPayload {
                prices: vec![
                    PriceEntry {
                        price: 12.5,
                        datetime: "2024-05-01T12:00:00Z".to_string(),
                    },
                    PriceEntry {
                        price: 11.0,
                        datetime: "2024-05-01T11:00:00Z".to_string(),
                    },
                ],
            },
            vwaps: VwapsPayload {
                vwaps: vec![VwapEntry { vwap: 12.1 }, VwapEntry { vwap: 9.0 }],
            },
            summary: SummaryPayload {
                summary: MarketSummary {
                    volume: 800.0,
                    latest_close_prices: vec![ClosePriceEntry {
                        close_price: 12.0,
                        datetime: "2024-05-01T10:00:00Z".to_string(),
                    }],
                },
            },
        }
    }

    #[test]
    fn snapshot_takes_first_price_and_first_vwap() {
        let snapshot = MarketSnapshot::from_bundle(&bundle()).unwrap();
        assert_eq!(snapshot.price, 12.5);
        assert_eq!(
            snapshot.timestamp,
            parse_api_datetime("2024-05-01T12:00:00Z").unwrap()
        );
        assert_eq!(snapshot.vwap, 12.1);
        assert_eq!(snapshot.volume, 800.0);
        assert_eq!(snapshot.close_prices(), vec![12.0]);
    }

    #[test]
    fn empty_price_or_vwap_list_is_a_parse_error() {
        let mut b = bundle();
        b.prices.prices.clear();
        assert!(matches!(
            MarketSnapshot::from_bundle(&b),
            Err(PipelineError::Parse(_))
        ));

        let mut b = bundle();
        b.vwaps.vwaps.clear();
        assert!(matches!(
            MarketSnapshot::from_bundle(&b),
            Err(PipelineError::Parse(_))
        ));
    }

    #[test]
    fn non_finite_values_invalidate_the_snapshot() {
        let mut b = bundle();
        b.summary.summary.volume = f64::NAN;
        assert!(matches!(
            MarketSnapshot::from_bundle(&b),
            Err(PipelineError::Parse(_))
        ));

        let mut b = bundle();
        b.vwaps.vwaps[0].vwap = f64::INFINITY;
        assert!(matches!(
            MarketSnapshot::from_bundle(&b),
            Err(PipelineError::Parse(_))
        ));
    }

    #[test]
    fn empty_close_list_still_builds_a_snapshot() {
        let mut b = bundle();
        b.summary.summary.latest_close_prices.clear();
        let snapshot = MarketSnapshot::from_bundle(&b).unwrap();
        assert!(snapshot.close_series.is_empty());
    }
}
