use crate::analysis::moving_average::{compute_sma, trailing_timestamps};
use crate::domain::OverlayOptions;
use crate::error::Result;
use crate::models::{MarketSnapshot, PlotSpec, SeriesLine, SmaOverlay};

/// Build the chart description for one snapshot.
/// The SMA overlay is left out, without error, when the series is shorter than the window.
pub fn assemble_plot(snapshot: &MarketSnapshot, options: &OverlayOptions) -> Result<PlotSpec> {
    let axis = snapshot.close_axis();

    let sma_line = if options.show_sma && axis.len() >= options.sma_window {
        let values = compute_sma(&axis.prices, options.sma_window)?;
        let x = trailing_timestamps(&axis.timestamps, values.len()).to_vec();
        Some(SmaOverlay {
            window: options.sma_window,
            line: SeriesLine { x, y: values },
        })
    } else {
        None
    };

    let point_count = axis.len();
    Ok(PlotSpec {
        series: SeriesLine {
            x: axis.timestamps,
            y: axis.prices,
        },
        vwap_line: options.show_vwap.then_some(snapshot.vwap),
        sma_line,
        point_count,
    })
}
