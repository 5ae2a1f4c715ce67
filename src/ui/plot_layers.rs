use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi, Points};

use crate::config::plot::PLOT_CONFIG;
use crate::models::PlotSpec;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub spec: &'a PlotSpec,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. PRICE SERIES LAYER (line + a marker on every close)
// ============================================================================
pub struct PriceSeriesLayer;

impl PlotLayer for PriceSeriesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points = ctx.spec.series.points();
        if points.is_empty() {
            return;
        }
        let label = UI_TEXT.plot_price_series;

        plot_ui.line(
            Line::new(label, PlotPoints::new(points.clone()))
                .color(PLOT_CONFIG.price_line_color)
                .width(PLOT_CONFIG.price_line_width),
        );

        // Same name, so the legend groups markers with the line
        plot_ui.points(
            Points::new(label, PlotPoints::new(points))
                .color(PLOT_CONFIG.price_line_color)
                .radius(PLOT_CONFIG.price_marker_radius),
        );
    }
}

// ============================================================================
// 2. VWAP LAYER (dashed horizontal reference)
// ============================================================================
pub struct VwapLayer;

impl PlotLayer for VwapLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(vwap) = ctx.spec.vwap_line {
            plot_ui.hline(
                HLine::new(UI_TEXT.plot_vwap, vwap)
                    .color(PLOT_CONFIG.vwap_line_color)
                    .width(PLOT_CONFIG.vwap_line_width)
                    .style(LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// 3. SMA LAYER
// ============================================================================
pub struct SmaLayer;

impl PlotLayer for SmaLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(sma) = &ctx.spec.sma_line else {
            return;
        };
        let label = sma_legend_label(sma.window);
        plot_ui.line(
            Line::new(label, PlotPoints::new(sma.line.points()))
                .color(PLOT_CONFIG.sma_line_color)
                .width(PLOT_CONFIG.sma_line_width),
        );
    }
}

fn sma_legend_label(window: usize) -> String {
    format!("{} ({})", UI_TEXT.plot_sma_prefix, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_legend_names_the_window() {
        assert_eq!(sma_legend_label(5), "SMA (5)");
    }
}
