//! Turns the summary's close-price list into parallel numeric axes.
//!
//! Order is preserved as returned by the API (never re-sorted). One bad
//! datetime fails the whole list; entries are not skipped.

use crate::data::payloads::ClosePriceEntry;
use crate::error::{PipelineError, Result};
use crate::models::ClosePricePoint;
use crate::models::snapshot::require_finite;
use crate::utils::time_utils::{parse_api_datetime, to_axis_secs};

/// Timestamps (seconds since epoch) and prices, index-aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedSeries {
    pub timestamps: Vec<f64>,
    pub prices: Vec<f64>,
}

impl NormalizedSeries {
    pub fn from_points(points: &[ClosePricePoint]) -> Self {
        let (timestamps, prices) = points
            .iter()
            .map(|p| (to_axis_secs(&p.timestamp), p.close_price))
            .unzip();
        Self { timestamps, prices }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

pub fn parse_close_series(entries: &[ClosePriceEntry]) -> Result<Vec<ClosePricePoint>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let timestamp = parse_api_datetime(&entry.datetime).ok_or_else(|| {
                PipelineError::Parse(format!(
                    "close price #{} has an invalid datetime '{}'",
                    index, entry.datetime
                ))
            })?;
            Ok(ClosePricePoint {
                timestamp,
                close_price: require_finite("closePrice", entry.close_price)?,
            })
        })
        .collect()
}

/// Payload entries straight to numeric axes.
pub fn normalize(entries: &[ClosePriceEntry]) -> Result<NormalizedSeries> {
    Ok(NormalizedSeries::from_points(&parse_close_series(entries)?))
}
