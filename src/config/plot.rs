//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub vwap_line_color: Color32,
    pub sma_line_color: Color32,
    pub price_line_width: f32,
    pub vwap_line_width: f32,
    pub sma_line_width: f32,
    /// Radius of the markers drawn on every close price
    pub price_marker_radius: f32,
    /// Distance between vertical gridlines, in seconds
    pub x_grid_step_secs: f64,
    /// Above this many gridlines the step is doubled until it fits
    pub max_x_gridlines: usize,
    /// chrono format string for x-axis labels
    pub x_label_format: &'static str,
    /// Fraction of the y range added above and below the data
    pub y_margin_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(65, 105, 225), // Royal blue
    vwap_line_color: Color32::from_rgb(0, 200, 0),     // Green
    sma_line_color: Color32::from_rgb(255, 165, 0),    // Orange
    price_line_width: 2.0,
    vwap_line_width: 1.5,
    sma_line_width: 2.0,
    price_marker_radius: 3.0,
    x_grid_step_secs: 3_600.0, // hourly
    max_x_gridlines: 24,
    x_label_format: "%H:%M",
    y_margin_pct: 0.05,
};
