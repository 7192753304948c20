//! Linear extrapolation of coherence overhead onto slower interconnects.
//!
//! Classifies the per-thread step costs of the observed series into
//! soft-NUMA buckets, measures a baseline slope over a reference interval,
//! then projects two synthetic points per candidate CXL latency.

use benchio::Series;
use cxlplot::config::{ExtrapolationConfig, StepClassifyConfig};
use trend::{
    classify_step_costs, extrapolate_linear, slope_between, ExtrapolationParams, Projection,
    StepAverages, StepThresholds, TrendError,
};

/// Classified step costs plus the projections derived from them.
#[derive(Debug, Clone)]
pub struct TierProjections {
    /// Mean step cost per soft-NUMA bucket, measured from the series.
    pub steps: StepAverages,
    /// Slope of the series over the reference interval.
    pub base_slope: f64,
    /// Two-point estimate per candidate latency, ascending by latency.
    pub projections: Vec<Projection>,
}

/// Projects the observed series onto each candidate interconnect latency.
pub fn project_tiers(
    series: &Series,
    extrapolation: &ExtrapolationConfig,
    steps_cfg: &StepClassifyConfig,
) -> Result<TierProjections, TrendError> {
    let steps = classify_step_costs(
        &series.values,
        StepThresholds {
            inter_max: steps_cfg.inter_max,
            intra_max: steps_cfg.intra_max,
        },
    )?;

    let (first_row, last_row) = extrapolation.baseline_rows;
    let base_slope = slope_between(&series.threads, &series.values, first_row, last_row)?;

    let (last_threads, last_value) = series.last().ok_or(TrendError::InsufficientData {
        len: 0,
        required: 2,
    })?;

    let params = ExtrapolationParams {
        base_slope,
        observed_ratio: extrapolation.inter_soft_numa_ns,
        avg_inter_factor: extrapolation
            .inter_step_override
            .unwrap_or(steps.inter_mean),
        intra_factor: extrapolation.intra_soft_numa_ns,
        step_size: extrapolation.step_threads,
    };
    let projections = extrapolate_linear(
        last_threads,
        last_value,
        &extrapolation.cxl_latencies_ns,
        &params,
    )?;

    Ok(TierProjections {
        steps,
        base_slope,
        projections,
    })
}
