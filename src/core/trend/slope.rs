use crate::error::TrendError;

/// Discrete derivative of `y` with respect to `x`.
///
/// Interior points use the central difference
/// `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])`; the two boundary points fall
/// back to a one-sided difference. Output length equals input length.
pub fn gradient(x: &[f64], y: &[f64]) -> Result<Vec<f64>, TrendError> {
    if x.len() != y.len() {
        return Err(TrendError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(TrendError::InsufficientData {
            len: x.len(),
            required: 2,
        });
    }

    let n = x.len();
    let mut slope = vec![0.0; n];
    slope[0] = difference(x[0], x[1], y[0], y[1])?;
    for i in 1..n - 1 {
        slope[i] = difference(x[i - 1], x[i + 1], y[i - 1], y[i + 1])?;
    }
    slope[n - 1] = difference(x[n - 2], x[n - 1], y[n - 2], y[n - 1])?;

    Ok(slope)
}

/// Slope of the chord between sample `i` and sample `j`.
pub fn slope_between(x: &[f64], y: &[f64], i: usize, j: usize) -> Result<f64, TrendError> {
    if x.len() != y.len() {
        return Err(TrendError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let required = i.max(j) + 1;
    if x.len() < required {
        return Err(TrendError::InsufficientData {
            len: x.len(),
            required,
        });
    }
    difference(x[i], x[j], y[i], y[j])
}

fn difference(x0: f64, x1: f64, y0: f64, y1: f64) -> Result<f64, TrendError> {
    let span = x1 - x0;
    if span == 0.0 {
        return Err(TrendError::DivisionByZero {
            context: "slope over a repeated thread count",
        });
    }
    Ok((y1 - y0) / span)
}

/// Trailing moving average over a fixed window.
///
/// Only the fully-windowed positions are produced, so the output holds
/// exactly `values.len() - window + 1` entries: `output[i]` is the mean of
/// `values[i..i + window]`.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, TrendError> {
    if window == 0 {
        return Err(TrendError::InvalidWindow {
            reason: "moving-average window must be non-zero".to_string(),
        });
    }
    if values.len() < window {
        return Err(TrendError::InsufficientData {
            len: values.len(),
            required: window,
        });
    }

    let mut averaged = Vec::with_capacity(values.len() - window + 1);
    let mut sum: f64 = values.iter().take(window).sum();
    averaged.push(sum / window as f64);

    for i in window..values.len() {
        sum = sum - values[i - window] + values[i];
        averaged.push(sum / window as f64);
    }

    Ok(averaged)
}
