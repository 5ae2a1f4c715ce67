use crate::config::REPORT_TEXT;

/// A line of (x, y) points. `x` is seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesLine {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SeriesLine {
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(x, y)| [*x, *y]).collect()
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// SMA overlay, right-aligned to the last timestamps of the primary series.
#[derive(Debug, Clone, PartialEq)]
pub struct SmaOverlay {
    pub window: usize,
    pub line: SeriesLine,
}

/// Renderable chart description. Drawing it is the chart backend's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotSpec {
    pub series: SeriesLine,
    pub vwap_line: Option<f64>,
    pub sma_line: Option<SmaOverlay>,
    /// Number of points of the primary series, whatever overlays are shown.
    pub point_count: usize,
}

impl PlotSpec {
    pub fn point_count_label(&self) -> String {
        format!("{}{}", REPORT_TEXT.points_displayed, self.point_count)
    }

    /// Every plotted y value, used for axis bounds.
    pub fn all_y_values(&self) -> Vec<f64> {
        let mut values = self.series.y.clone();
        if let Some(vwap) = self.vwap_line {
            values.push(vwap);
        }
        if let Some(sma) = &self.sma_line {
            values.extend_from_slice(&sma.line.y);
        }
        values
    }
}
