use std::fmt;

/// Discrete recommendation derived from price divergence, most bullish first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum RecommendationTier {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecommendationTier::StrongBuy => write!(f, "Strong Buy"),
            RecommendationTier::Buy => write!(f, "Buy"),
            RecommendationTier::Neutral => write!(f, "Neutral"),
            RecommendationTier::Sell => write!(f, "Sell"),
            RecommendationTier::StrongSell => write!(f, "Strong Sell"),
        }
    }
}

/// Percentage divergence of the current price from the mean close, and its tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceResult {
    pub divergence_pct: f64,
    pub tier: RecommendationTier,
}
