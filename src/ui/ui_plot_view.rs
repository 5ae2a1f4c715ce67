use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::models::PlotSpec;
use crate::ui::plot_layers::{LayerContext, PlotLayer, PriceSeriesLayer, SmaLayer, VwapLayer};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format_utils::format_price;
use crate::utils::maths_utils;
use crate::utils::time_utils::axis_secs_to_label;

/// Padding applied to the x range when the series is a single point.
const SINGLE_POINT_X_PAD_SECS: f64 = 1_800.0;

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    pub fn show_my_plot(&mut self, ui: &mut egui::Ui, spec: &PlotSpec) {
        let x_bounds = x_bounds(spec);
        let y_bounds = padded_y_bounds(spec, PLOT_CONFIG.y_margin_pct);

        let legend = Legend::default().position(Corner::LeftTop);

        Plot::new("market_plot")
            .legend(legend)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .label_formatter(|name, value| {
                let time = axis_secs_to_label(value.x, PLOT_CONFIG.x_label_format);
                if name.is_empty() {
                    format!("{}\n{}", time, format_price(value.y))
                } else {
                    format!("{}\n{}\n{}", name, time, format_price(value.y))
                }
            })
            .x_grid_spacer(|input| {
                let (min, max) = input.bounds;
                x_grid_values(
                    min,
                    max,
                    PLOT_CONFIG.x_grid_step_secs,
                    PLOT_CONFIG.max_x_gridlines,
                )
                .into_iter()
                .map(|(value, step_size)| GridMark { value, step_size })
                .collect()
            })
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                if let Some((x_min, x_max)) = x_bounds {
                    plot_ui.set_plot_bounds_x(x_min..=x_max);
                }
                if let Some((y_min, y_max)) = y_bounds {
                    plot_ui.set_plot_bounds_y(y_min..=y_max);
                }

                // --- LAYER RENDERING SYSTEM ---
                let ctx = LayerContext { spec };
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(PriceSeriesLayer),
                    Box::new(VwapLayer),
                    Box::new(SmaLayer),
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| {
            axis_secs_to_label(grid_mark.value, PLOT_CONFIG.x_label_format)
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

/// First and last timestamp of the primary series.
fn x_bounds(spec: &PlotSpec) -> Option<(f64, f64)> {
    let (min, max) = maths_utils::get_min_max(&spec.series.x)?;
    if min == max {
        Some((min - SINGLE_POINT_X_PAD_SECS, max + SINGLE_POINT_X_PAD_SECS))
    } else {
        Some((min, max))
    }
}

/// Data range of every plotted value, widened by `margin_pct` of the range on each side.
fn padded_y_bounds(spec: &PlotSpec, margin_pct: f64) -> Option<(f64, f64)> {
    let (min, max) = maths_utils::get_min_max(&spec.all_y_values())?;
    let range = max - min;
    // Flat series: pad relative to the price itself
    let pad = if range > 0.0 {
        range * margin_pct
    } else {
        (min.abs() * margin_pct).max(f64::EPSILON)
    };
    Some((min - pad, max + pad))
}

/// Gridline positions (value, step) aligned on multiples of `base_step`.
/// The step doubles until no more than `max_marks` lines fit in the range.
fn x_grid_values(min: f64, max: f64, base_step: f64, max_marks: usize) -> Vec<(f64, f64)> {
    if !(min.is_finite() && max.is_finite()) || max <= min || base_step <= 0.0 {
        return Vec::new();
    }
    let mut step = base_step;
    while (max - min) / step > max_marks as f64 {
        step *= 2.0;
    }
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end).map(|i| (i as f64 * step, step)).collect()
}
