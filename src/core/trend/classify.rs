use crate::error::TrendError;

/// Boundaries separating step costs into the two soft-NUMA buckets.
///
/// The defaults are the empirically chosen values from the coherence
/// experiment; callers can override them from configuration.
#[derive(Debug, Clone, Copy)]
pub struct StepThresholds {
    /// Steps below this cost stay inside a soft-NUMA domain.
    pub inter_max: f64,
    /// Steps at or above `inter_max` but below this cross a domain boundary.
    /// Anything at or above it is excluded from both buckets.
    pub intra_max: f64,
}

impl Default for StepThresholds {
    fn default() -> Self {
        Self {
            inter_max: 1.9,
            intra_max: 4.0,
        }
    }
}

/// Mean step cost per bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepAverages {
    pub inter_mean: f64,
    pub intra_mean: f64,
}

/// Partitions the first-difference series into the two soft-NUMA buckets
/// and reports the mean of each.
///
/// Each difference `d = values[i] - values[i-1]` lands in the inter bucket
/// when `d < inter_max`, in the intra bucket when
/// `inter_max <= d < intra_max`, and nowhere otherwise. An empty bucket is
/// reported as an error rather than dividing by zero.
pub fn classify_step_costs(
    values: &[f64],
    thresholds: StepThresholds,
) -> Result<StepAverages, TrendError> {
    if values.len() < 2 {
        return Err(TrendError::InsufficientData {
            len: values.len(),
            required: 2,
        });
    }

    let (inter, intra) = values.windows(2).map(|pair| pair[1] - pair[0]).fold(
        ((0.0, 0usize), (0.0, 0usize)),
        |(inter, intra), d| {
            if d < thresholds.inter_max {
                ((inter.0 + d, inter.1 + 1), intra)
            } else if d < thresholds.intra_max {
                (inter, (intra.0 + d, intra.1 + 1))
            } else {
                (inter, intra)
            }
        },
    );

    if inter.1 == 0 {
        return Err(TrendError::EmptyBucket { bucket: "inter" });
    }
    if intra.1 == 0 {
        return Err(TrendError::EmptyBucket { bucket: "intra" });
    }

    Ok(StepAverages {
        inter_mean: inter.0 / inter.1 as f64,
        intra_mean: intra.0 / intra.1 as f64,
    })
}
