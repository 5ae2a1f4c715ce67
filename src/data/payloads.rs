//! Wire payloads of the three market endpoints.
//!
//! Fields the dashboard does not read are ignored by serde; fields it does read are required,
//! so a missing field is a decode failure rather than a silent default.

use serde::Deserialize;

/// `GET {base}/{realm}/market/prices/{resource}/{quality}?interval={interval}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PricesPayload {
    pub prices: Vec<PriceEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub price: f64,
    pub datetime: String,
}

/// `GET {base}/{realm}/market/vwaps/{resource}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VwapsPayload {
    pub vwaps: Vec<VwapEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VwapEntry {
    pub vwap: f64,
}

/// `GET {base}/{realm}/market/resources/{resource}/{quality}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryPayload {
    pub summary: MarketSummary,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub volume: f64,
    pub latest_close_prices: Vec<ClosePriceEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosePriceEntry {
    pub close_price: f64,
    pub datetime: String,
}

/// The three payloads of one successful fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBundle {
    pub prices: PricesPayload,
    pub vwaps: VwapsPayload,
    pub summary: SummaryPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_payload_reads_camel_case_and_ignores_extra_fields() {
        let json = r#"{
            "summary": {
                "volume": 1234.5,
                "averagePrice": 10.1,
                "latestClosePrices": [
                    {"closePrice": 10.0, "datetime": "2024-05-01T10:00:00Z"},
                    {"closePrice": 10.5, "datetime": "2024-05-01T11:00:00Z"}
                ]
            }
        }"#;
        let payload: SummaryPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.summary.volume, 1234.5);
        assert_eq!(payload.summary.latest_close_prices.len(), 2);
        assert_eq!(payload.summary.latest_close_prices[1].close_price, 10.5);
    }

    #[test]
    fn missing_required_field_fails_to_decode() {
        let json = r#"{"prices": [{"price": 1.0}]}"#;
        assert!(serde_json::from_str::<PricesPayload>(json).is_err());

        let json = r#"{"summary": {"latestClosePrices": []}}"#;
        assert!(serde_json::from_str::<SummaryPayload>(json).is_err());
    }

    #[test]
    fn vwap_payload_decodes() {
        let payload: VwapsPayload =
            serde_json::from_str(r#"{"vwaps": [{"vwap": 0.42, "datetime": "x"}]}"#).unwrap();
        assert_eq!(payload.vwaps[0].vwap, 0.42);
    }
}
