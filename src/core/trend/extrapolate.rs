use crate::error::TrendError;

/// Constants feeding the two-point linear projection.
#[derive(Debug, Clone)]
pub struct ExtrapolationParams {
    /// Slope measured over the reference interval of the observed series.
    pub base_slope: f64,
    /// Latency of the interconnect the series was measured on (ns).
    pub observed_ratio: f64,
    /// Mean per-step cost of crossing a soft-NUMA boundary.
    pub avg_inter_factor: f64,
    /// Intra-node latency constant used to rescale the baseline slope (ns).
    pub intra_factor: f64,
    /// Thread distance between the two synthetic points.
    pub step_size: f64,
}

/// A synthetic sample beyond the observed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolatedPoint {
    pub threads: f64,
    pub value: f64,
}

/// Two-point projection of the series onto one target latency.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub target_ratio: f64,
    pub points: [ExtrapolatedPoint; 2],
}

/// Projects the last observed sample onto each target latency ratio.
///
/// For every ratio `r` the first synthetic point sits one thread past the
/// observed range at `last_value + avg_inter_factor * (r / observed_ratio)`;
/// the second sits `step_size` threads further, climbing with the baseline
/// slope rescaled by `r / intra_factor`. The projections come back ordered
/// by ascending ratio so chart legends stay stable.
pub fn extrapolate_linear(
    last_threads: f64,
    last_value: f64,
    target_ratios: &[f64],
    params: &ExtrapolationParams,
) -> Result<Vec<Projection>, TrendError> {
    if params.observed_ratio == 0.0 {
        return Err(TrendError::DivisionByZero {
            context: "extrapolation over a zero observed latency",
        });
    }
    if params.intra_factor == 0.0 {
        return Err(TrendError::DivisionByZero {
            context: "extrapolation over a zero intra-node latency",
        });
    }
    if params.step_size <= 0.0 {
        return Err(TrendError::InvalidWindow {
            reason: format!("extrapolation step {} must be positive", params.step_size),
        });
    }

    let mut ratios = target_ratios.to_vec();
    ratios.sort_by(|a, b| a.total_cmp(b));

    let mut projections = Vec::with_capacity(ratios.len());
    for ratio in ratios {
        let first = ExtrapolatedPoint {
            threads: last_threads + 1.0,
            value: last_value + params.avg_inter_factor * (ratio / params.observed_ratio),
        };
        let second = ExtrapolatedPoint {
            threads: first.threads + params.step_size,
            value: first.value + params.base_slope * (ratio / params.intra_factor) * params.step_size,
        };
        projections.push(Projection {
            target_ratio: ratio,
            points: [first, second],
        });
    }

    Ok(projections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExtrapolationParams {
        ExtrapolationParams {
            base_slope: 2.0,
            observed_ratio: 25.8,
            avg_inter_factor: 0.662,
            intra_factor: 106.6,
            step_size: 128.0,
        }
    }

    #[test]
    fn test_two_points_per_ratio_sorted_ascending() {
        let projections =
            extrapolate_linear(256.0, 10.0, &[400.0, 200.0, 800.0], &params()).unwrap();

        assert_eq!(projections.len(), 3);
        assert_eq!(projections[0].target_ratio, 200.0);
        assert_eq!(projections[1].target_ratio, 400.0);
        assert_eq!(projections[2].target_ratio, 800.0);

        for p in &projections {
            assert_eq!(p.points[0].threads, 257.0);
            assert_eq!(p.points[1].threads, 385.0);
            assert!(p.points[0].value > 10.0);
            assert!(p.points[1].value > p.points[0].value);
        }
    }

    #[test]
    fn test_first_point_value() {
        let projections = extrapolate_linear(256.0, 10.0, &[200.0], &params()).unwrap();
        let expected = 10.0 + 0.662 * (200.0 / 25.8);
        assert!((projections[0].points[0].value - expected).abs() < 1e-10);
    }

    #[test]
    fn test_zero_observed_ratio_fails() {
        let mut p = params();
        p.observed_ratio = 0.0;
        assert!(matches!(
            extrapolate_linear(256.0, 10.0, &[200.0], &p),
            Err(TrendError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_zero_intra_factor_fails() {
        let mut p = params();
        p.intra_factor = 0.0;
        assert!(matches!(
            extrapolate_linear(256.0, 10.0, &[200.0], &p),
            Err(TrendError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_empty_ratio_list() {
        let projections = extrapolate_linear(256.0, 10.0, &[], &params()).unwrap();
        assert!(projections.is_empty());
    }
}
