use crate::error::{PipelineError, Result};

/// Unweighted rolling mean. Output `i` is the mean of `prices[i..i + window]`,
/// so the result has `len - window + 1` values with no edge padding.
pub fn compute_sma(prices: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(PipelineError::InvalidInput(
            "SMA window must be at least 1".to_string(),
        ));
    }
    if window > prices.len() {
        return Err(PipelineError::InsufficientData {
            needed: window,
            available: prices.len(),
        });
    }

    let divisor = window as f64;
    Ok(prices
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / divisor)
        .collect())
}

/// The last `n` timestamps: the x axis of a trailing-window SMA.
pub fn trailing_timestamps(timestamps: &[f64], n: usize) -> &[f64] {
    &timestamps[timestamps.len().saturating_sub(n)..]
}
