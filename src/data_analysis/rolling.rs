// src/data_analysis/rolling.rs

use ndarray::Array1;

/// Trailing inclusive moving average: entry `i` is the mean of
/// `values[i + 1 - window ..= i]`. Entries without a full window behind
/// them are NaN, never zero.
pub fn trailing_mean(values: &[f64], window: usize) -> Array1<f64> {
    let mut out = Array1::from_elem(values.len(), f64::NAN);
    if window == 0 || values.len() < window {
        return out;
    }
    for (i, chunk) in values.windows(window).enumerate() {
        out[i + window - 1] = chunk.iter().sum::<f64>() / window as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_entries_are_nan() {
        let out = trailing_mean(&[1.0; 25], 20);
        assert!(out.iter().take(19).all(|v| v.is_nan()));
        assert!(out.iter().skip(19).all(|v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn window_slides_over_sequence() {
        let out = trailing_mean(&[0.0, 1.0, 2.0, 3.0], 2);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 0.5);
        assert_eq!(out[2], 1.5);
        assert_eq!(out[3], 2.5);
    }

    #[test]
    fn short_input_stays_undefined() {
        let out = trailing_mean(&[1.0, 2.0], 20);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn zero_window_stays_undefined() {
        let out = trailing_mean(&[1.0, 2.0], 0);
        assert!(out.iter().all(|v| v.is_nan()));
    }
}

// src/data_analysis/rolling.rs
