//! Smoothed-derivative pipeline for the coherence benchmark.
//!
//! Smooths the measured overhead with a Savitzky-Golay filter, takes the
//! discrete derivative with respect to the thread count, then denoises the
//! derivative with a trailing moving average.

use benchio::Series;
use cxlplot::config::SmoothingConfig;
use trend::{gradient, moving_average, savgol_smooth, TrendError};

/// Smoothed derivative of a benchmark series, aligned to its thread counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSlope {
    /// Thread counts with a fully-windowed average available.
    pub threads: Vec<f64>,
    /// Moving-average slope values, same length as `threads`.
    pub values: Vec<f64>,
}

impl SmoothedSlope {
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.threads
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect()
    }
}

/// Runs smooth -> gradient -> trailing moving average over a series.
///
/// The first `slope_window - 1` derivative samples have no full averaging
/// window and are dropped, so the output starts at
/// `series.threads[slope_window - 1]`.
pub fn smoothed_slope(series: &Series, cfg: &SmoothingConfig) -> Result<SmoothedSlope, TrendError> {
    let smooth = savgol_smooth(&series.values, cfg.window_length, cfg.poly_order)?;
    let slope = gradient(&series.threads, &smooth)?;
    let averaged = moving_average(&slope, cfg.slope_window)?;
    let threads = series.threads[cfg.slope_window - 1..].to_vec();

    Ok(SmoothedSlope {
        threads,
        values: averaged,
    })
}
