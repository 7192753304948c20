//! Integration tests for the latency projection.

use trend::{
    classify_step_costs, extrapolate_linear, ExtrapolationParams, StepThresholds, TrendError,
};

#[test]
fn test_reference_projection_is_monotonic_and_ordered() {
    let params = ExtrapolationParams {
        base_slope: 2.0,
        observed_ratio: 25.8,
        avg_inter_factor: 0.662,
        intra_factor: 106.6,
        step_size: 128.0,
    };
    let projections =
        extrapolate_linear(256.0, 10.0, &[200.0, 400.0, 800.0], &params).unwrap();

    assert_eq!(projections.len(), 3);

    let ratios: Vec<f64> = projections.iter().map(|p| p.target_ratio).collect();
    assert_eq!(ratios, vec![200.0, 400.0, 800.0]);

    for p in &projections {
        assert!(p.points[0].threads > 256.0);
        assert!(p.points[1].threads > p.points[0].threads);
        assert!(p.points[0].value > 10.0);
        assert!(p.points[1].value > p.points[0].value);
    }

    // A slower interconnect projects a larger overhead.
    assert!(projections[1].points[0].value > projections[0].points[0].value);
    assert!(projections[2].points[1].value > projections[1].points[1].value);
}

#[test]
fn test_single_bucket_surfaces_as_error_not_crash() {
    // Every step is small, so the intra bucket stays empty.
    let values: Vec<f64> = (0..32).map(|i| i as f64 * 0.5).collect();
    let result = classify_step_costs(&values, StepThresholds::default());

    assert_eq!(result, Err(TrendError::EmptyBucket { bucket: "intra" }));
}

#[test]
fn test_zero_observed_ratio_is_reported() {
    let params = ExtrapolationParams {
        base_slope: 2.0,
        observed_ratio: 0.0,
        avg_inter_factor: 0.662,
        intra_factor: 106.6,
        step_size: 128.0,
    };
    assert!(matches!(
        extrapolate_linear(256.0, 10.0, &[200.0], &params),
        Err(TrendError::DivisionByZero { .. })
    ));
}
