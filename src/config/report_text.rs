//! Wording of the text summary and of the one-line error messages.

pub struct ReportText {
    // Summary text
    pub summary_price: &'static str,
    pub summary_vwap: &'static str,
    pub summary_volume: &'static str,
    pub summary_last_update: &'static str,
    pub summary_divergence: &'static str,
    pub summary_recommendation: &'static str,
    pub points_displayed: &'static str,

    // Errors
    pub error_fetch: &'static str,
    pub error_timeout: &'static str,
    pub error_parse: &'static str,
    pub error_calculation_prefix: &'static str,
    pub error_invalid_input_prefix: &'static str,
}

pub const REPORT_TEXT: ReportText = ReportText {
    summary_price: "Price: ",
    summary_vwap: "VWAP: ",
    summary_volume: "Volume: ",
    summary_last_update: "Last update: ",
    summary_divergence: "Divergence: ",
    summary_recommendation: "Recommendation: ",
    points_displayed: "Points displayed: ",

    error_fetch: "Error: check the parameters or the API.",
    error_timeout: "Error: the API did not respond in time.",
    error_parse: "Error while updating the chart.",
    error_calculation_prefix: "Calculation error: ",
    error_invalid_input_prefix: "Invalid input: ",
};
