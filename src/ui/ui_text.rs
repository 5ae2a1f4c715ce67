//! All user-visible strings in one place.

pub struct UiText {
    pub window_title: &'static str,

    // Parameter panel
    pub parameters_heading: &'static str,
    pub realm_label: &'static str,
    pub resource_label: &'static str,
    pub quality_label: &'static str,
    pub interval_label: &'static str,
    pub show_vwap_label: &'static str,
    pub show_sma_label: &'static str,
    pub sma_length_label: &'static str,
    pub profile_heading: &'static str,
    pub fetch_button: &'static str,
    pub fetching_label: &'static str,

    // Central panel
    pub market_heading: &'static str,
    pub no_data_yet: &'static str,

    // Plot
    pub plot_title: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub plot_price_series: &'static str,
    pub plot_vwap: &'static str,
    pub plot_sma_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "SimCo Broker",

    parameters_heading: "Parameters",
    realm_label: "Realm ID:",
    resource_label: "Resource ID:",
    quality_label: "Quality:",
    interval_label: "Interval:",
    show_vwap_label: "Show VWAP",
    show_sma_label: "Show SMA",
    sma_length_label: "SMA length:",
    profile_heading: "Divergence thresholds",
    fetch_button: "Fetch data",
    fetching_label: "Fetching...",

    market_heading: "Market",
    no_data_yet: "No data yet. Pick a resource and press \"Fetch data\".",

    plot_title: "Price history",
    plot_x_axis: "Time",
    plot_y_axis: "Price",
    plot_price_series: "Price",
    plot_vwap: "VWAP",
    plot_sma_prefix: "SMA",
};
