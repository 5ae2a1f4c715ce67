use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation intervals accepted by the market price endpoint.
/// The token is forwarded verbatim in the query string and never interpreted.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum MarketInterval {
    #[default]
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    TwoHours,
    FourHours,
    TwelveHours,
    OneDay,
    TwoDays,
    ThreeDays,
    OneWeek,
    TwoWeeks,
    OneMonth,
}

impl MarketInterval {
    /// Query-string token (note the API's mixed casing: `1Sem` vs `2sem`).
    pub fn as_query(&self) -> &'static str {
        match self {
            MarketInterval::OneMinute => "1min",
            MarketInterval::FiveMinutes => "5min",
            MarketInterval::FifteenMinutes => "15min",
            MarketInterval::OneHour => "1h",
            MarketInterval::TwoHours => "2h",
            MarketInterval::FourHours => "4h",
            MarketInterval::TwelveHours => "12h",
            MarketInterval::OneDay => "1J",
            MarketInterval::TwoDays => "2J",
            MarketInterval::ThreeDays => "3J",
            MarketInterval::OneWeek => "1Sem",
            MarketInterval::TwoWeeks => "2sem",
            MarketInterval::OneMonth => "1mois",
        }
    }

    pub fn from_query(token: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|interval| interval.as_query() == token)
    }
}

impl fmt::Display for MarketInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}
