use crate::error::TrendError;

/// Smooths a series with a Savitzky-Golay filter.
///
/// Each value is replaced by a least-squares polynomial fit of order
/// `poly_order` over the window of `window_length` samples centered on it.
/// The `window_length / 2` samples at each end are covered by a polynomial
/// fitted to the first (respectively last) full window and evaluated at the
/// edge positions, so the output always has the same length as the input.
///
/// # Arguments
///
/// * `values` - The sample values, in series order.
/// * `window_length` - Sliding window size; must be odd.
/// * `poly_order` - Fit order; must be smaller than `window_length`.
pub fn savgol_smooth(
    values: &[f64],
    window_length: usize,
    poly_order: usize,
) -> Result<Vec<f64>, TrendError> {
    if window_length % 2 == 0 {
        return Err(TrendError::InvalidWindow {
            reason: format!("window length {window_length} must be odd"),
        });
    }
    if poly_order >= window_length {
        return Err(TrendError::InvalidWindow {
            reason: format!(
                "polynomial order {poly_order} must be smaller than window length {window_length}"
            ),
        });
    }
    if values.len() < window_length {
        return Err(TrendError::InsufficientData {
            len: values.len(),
            required: window_length,
        });
    }

    let n = values.len();
    let half = window_length / 2;
    let mut smoothed = vec![0.0; n];

    // Interior: fit over the centered window, evaluate at its midpoint.
    let offsets: Vec<f64> = (0..window_length)
        .map(|j| j as f64 - half as f64)
        .collect();
    for i in half..n - half {
        let coeffs = polyfit(&offsets, &values[i - half..=i + half], poly_order)?;
        smoothed[i] = polyval(&coeffs, 0.0);
    }

    // Edges: fit the first/last full window once, evaluate at the positions
    // the centered windows cannot reach.
    let positions: Vec<f64> = (0..window_length).map(|j| j as f64).collect();
    let head = polyfit(&positions, &values[..window_length], poly_order)?;
    for i in 0..half {
        smoothed[i] = polyval(&head, i as f64);
    }
    let tail = polyfit(&positions, &values[n - window_length..], poly_order)?;
    for i in n - half..n {
        smoothed[i] = polyval(&tail, (i + window_length - n) as f64);
    }

    Ok(smoothed)
}

/// Least-squares polynomial fit via the normal equations.
///
/// Returns the coefficients in ascending-power order.
fn polyfit(x: &[f64], y: &[f64], order: usize) -> Result<Vec<f64>, TrendError> {
    let m = order + 1;
    let mut ata = vec![vec![0.0; m]; m];
    let mut aty = vec![0.0; m];

    for (&xi, &yi) in x.iter().zip(y) {
        let mut powers = vec![1.0; 2 * m - 1];
        for k in 1..2 * m - 1 {
            powers[k] = powers[k - 1] * xi;
        }
        for r in 0..m {
            for c in 0..m {
                ata[r][c] += powers[r + c];
            }
            aty[r] += powers[r] * yi;
        }
    }

    solve(ata, aty)
}

/// Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>, TrendError> {
    let n = b.len();

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return Err(TrendError::DivisionByZero {
                context: "singular polynomial fit",
            });
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }

    Ok(x)
}

/// Evaluate an ascending-power coefficient vector at `x` (Horner).
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_length() {
        let values: Vec<f64> = (0..40)
            .map(|i| (i as f64 * 0.3).sin() + i as f64 * 0.1)
            .collect();
        let smoothed = savgol_smooth(&values, 11, 3).unwrap();
        assert_eq!(smoothed.len(), values.len());
    }

    #[test]
    fn test_reproduces_cubic_exactly() {
        // A cubic is inside the model space of an order-3 fit, so the
        // filter must return it unchanged everywhere, edges included.
        let values: Vec<f64> = (0..30)
            .map(|i| {
                let x = i as f64;
                0.5 * x * x * x - 2.0 * x * x + 3.0 * x - 7.0
            })
            .collect();
        let smoothed = savgol_smooth(&values, 11, 3).unwrap();
        for (s, v) in smoothed.iter().zip(&values) {
            assert!((s - v).abs() < 1e-6, "expected {v}, got {s}");
        }
    }

    #[test]
    fn test_damps_noise() {
        let clean: Vec<f64> = (0..50).map(|i| i as f64 * 0.5).collect();
        let noisy: Vec<f64> = clean
            .iter()
            .enumerate()
            .map(|(i, v)| v + if i % 2 == 0 { 0.4 } else { -0.4 })
            .collect();
        let smoothed = savgol_smooth(&noisy, 11, 3).unwrap();

        let noise = |series: &[f64]| -> f64 {
            series
                .iter()
                .zip(&clean)
                .skip(5)
                .take(40)
                .map(|(a, b)| (a - b).abs())
                .sum()
        };
        assert!(noise(&smoothed) < noise(&noisy));
    }

    #[test]
    fn test_rejects_short_series() {
        let values = vec![1.0; 10];
        let err = savgol_smooth(&values, 11, 3).unwrap_err();
        assert_eq!(
            err,
            TrendError::InsufficientData {
                len: 10,
                required: 11
            }
        );
    }

    #[test]
    fn test_rejects_even_window() {
        let values = vec![1.0; 20];
        assert!(matches!(
            savgol_smooth(&values, 10, 3),
            Err(TrendError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_rejects_order_at_window() {
        let values = vec![1.0; 20];
        assert!(matches!(
            savgol_smooth(&values, 11, 11),
            Err(TrendError::InvalidWindow { .. })
        ));
    }
}
