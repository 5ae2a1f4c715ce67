use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// (min, max) of a slice, or None if it is empty.
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

/// Arithmetic mean, or None for an empty slice.
pub fn mean(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    Some(vec.iter().mean())
}
