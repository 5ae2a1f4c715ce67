//! Divergence of the current price from the recent average close, and the
//! recommendation tier it maps to.
//!
//! Tiers come from an ordered table of threshold bands: the first band whose
//! bound the divergence falls under wins, and anything above every band gets
//! the table's `above` tier. Two named profiles exist (±3/±7 and ±5/±10).

use std::fmt;

use crate::error::{PipelineError, Result};
use crate::models::{DivergenceResult, RecommendationTier};
use crate::utils::maths_utils;

/// Upper edge of one tier band, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    pub bound: f64,
    /// `true`: value <= bound matches. `false`: value < bound matches.
    pub inclusive: bool,
    pub tier: RecommendationTier,
}

impl ThresholdBand {
    fn matches(&self, divergence_pct: f64) -> bool {
        if self.inclusive {
            divergence_pct <= self.bound
        } else {
            divergence_pct < self.bound
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    bands: Vec<ThresholdBand>,
    above: RecommendationTier,
}

impl ThresholdTable {
    /// Bands must have strictly increasing bounds so they never overlap.
    pub fn new(bands: Vec<ThresholdBand>, above: RecommendationTier) -> Result<Self> {
        if let Some(pair) = bands.windows(2).find(|pair| pair[0].bound >= pair[1].bound) {
            return Err(PipelineError::InvalidInput(format!(
                "threshold bounds must increase: {} is not below {}",
                pair[0].bound, pair[1].bound
            )));
        }
        if bands.iter().any(|band| !band.bound.is_finite()) {
            return Err(PipelineError::InvalidInput(
                "threshold bounds must be finite".to_string(),
            ));
        }
        Ok(Self { bands, above })
    }

    /// Symmetric table: strong < -strong_pct, buy < -mild_pct, neutral <= mild_pct, sell above.
    fn symmetric(mild_pct: f64, strong_pct: f64) -> Self {
        Self {
            bands: vec![
                ThresholdBand {
                    bound: -strong_pct,
                    inclusive: false,
                    tier: RecommendationTier::StrongBuy,
                },
                ThresholdBand {
                    bound: -mild_pct,
                    inclusive: false,
                    tier: RecommendationTier::Buy,
                },
                ThresholdBand {
                    bound: mild_pct,
                    inclusive: true,
                    tier: RecommendationTier::Neutral,
                },
            ],
            above: RecommendationTier::Sell,
        }
    }

    pub fn bands(&self) -> &[ThresholdBand] {
        &self.bands
    }

    pub fn classify(&self, divergence_pct: f64) -> RecommendationTier {
        self.bands
            .iter()
            .find(|band| band.matches(divergence_pct))
            .map(|band| band.tier)
            .unwrap_or(self.above)
    }
}

/// Named threshold sets. Which one production should use is undecided, so both are selectable.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, strum_macros::EnumIter, clap::ValueEnum,
)]
pub enum DivergenceProfile {
    /// Neutral within ±3%, strong signals beyond ±7%.
    #[default]
    Tight,
    /// Neutral within ±5%, strong signals beyond ±10%.
    Wide,
}

impl DivergenceProfile {
    pub fn table(&self) -> ThresholdTable {
        match self {
            DivergenceProfile::Tight => ThresholdTable::symmetric(3.0, 7.0),
            DivergenceProfile::Wide => ThresholdTable::symmetric(5.0, 10.0),
        }
    }
}

impl fmt::Display for DivergenceProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DivergenceProfile::Tight => write!(f, "Tight (±3% / ±7%)"),
            DivergenceProfile::Wide => write!(f, "Wide (±5% / ±10%)"),
        }
    }
}

/// `(current - mean) / mean * 100`, classified through `table`.
pub fn compute_divergence(
    current_price: f64,
    close_prices: &[f64],
    table: &ThresholdTable,
) -> Result<DivergenceResult> {
    if !current_price.is_finite() {
        return Err(PipelineError::InvalidInput(format!(
            "current price {} is not finite",
            current_price
        )));
    }
    let average_price =
        maths_utils::mean(close_prices).ok_or(PipelineError::InsufficientData {
            needed: 1,
            available: 0,
        })?;
    if average_price == 0.0 {
        return Err(PipelineError::DivisionByZero);
    }

    let divergence_pct = (current_price - average_price) / average_price * 100.0;
    Ok(DivergenceResult {
        divergence_pct,
        tier: table.classify(divergence_pct),
    })
}
