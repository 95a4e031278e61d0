//! Pairwise statistics over two equal-length sample sequences.
//!
//! These are the three independent, pure numerical building blocks of the
//! scoring engine. Each takes two slices and resolves every degenerate case
//! (empty input, length mismatch, zero denominator) to a defined fallback
//! value instead of propagating non-finite results, so callers never need
//! error handling around them.

/// First SSIM stabilizing constant.
///
/// Fixed by policy rather than derived from the signal's dynamic range, so
/// scores are not comparable with conventional image-SSIM values computed
/// with range-scaled constants. Changing these would change all historical
/// scores.
pub const SSIM_C1: f64 = 0.01;

/// Second SSIM stabilizing constant. See [`SSIM_C1`].
pub const SSIM_C2: f64 = 0.03;

/// Pearson product-moment correlation coefficient.
///
/// Both sequences are mean-centered, so correlation is invariant under
/// constant additive offsets. Returns 0.0 when either sequence is empty,
/// the lengths differ, or either sequence has zero variance.
#[must_use]
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || x.len() != y.len() {
        return 0.0;
    }

    let (mean_x, mean_y) = (mean(x), mean(y));

    let mut covariation = 0.0;
    let mut variation_x = 0.0;
    let mut variation_y = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariation += dx * dy;
        variation_x += dx * dx;
        variation_y += dy * dy;
    }

    let denominator = (variation_x * variation_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        covariation / denominator
    }
}

/// Mean of squared elementwise differences.
///
/// Returns `f64::INFINITY` when either sequence is empty or the lengths
/// differ. The sentinel propagates safely through downstream normalization:
/// `min(normalized, 1.0)` saturates it to the worst defined error instead of
/// producing NaN.
#[must_use]
pub fn mean_squared_error(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || x.len() != y.len() {
        return f64::INFINITY;
    }

    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| {
            let d = a - b;
            d * d
        })
        .sum();

    sum / length_to_f64(x.len())
}

/// Simplified structural similarity index.
///
/// A single-window, whole-sequence adaptation of the image SSIM formula,
/// not the sliding-window image variant: means, population variances, and
/// covariance are taken over the full sequence, stabilized by the fixed
/// constants [`SSIM_C1`] and [`SSIM_C2`]. Returns 0.0 when either sequence
/// is empty, the lengths differ, or the denominator is 0.
#[must_use]
pub fn ssim(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || x.len() != y.len() {
        return 0.0;
    }

    let n = length_to_f64(x.len());
    let (mean_x, mean_y) = (mean(x), mean(y));

    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut covariance = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        var_x += dx * dx;
        var_y += dy * dy;
        covariance += dx * dy;
    }
    var_x /= n;
    var_y /= n;
    covariance /= n;

    let numerator = (2.0 * mean_x * mean_y + SSIM_C1) * (2.0 * covariance + SSIM_C2);
    let denominator = (mean_x * mean_x + mean_y * mean_y + SSIM_C1) * (var_x + var_y + SSIM_C2);

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / length_to_f64(values.len())
}

/// Safely convert a slice length to f64.
///
/// Sequence lengths in practice are far below the f64 mantissa limit; the
/// cast is explicit so the precision-loss lint stays scoped here.
#[inline]
fn length_to_f64(len: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_correlation_identical_sequences() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((pearson_correlation(&x, &x) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_correlation_offset_invariance() {
        // Mean-centering makes correlation invariant under additive offsets.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let shifted: Vec<f64> = x.iter().map(|v| v + 1000.0).collect();
        assert!((pearson_correlation(&x, &shifted) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_correlation_anticorrelated() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert!((pearson_correlation(&x, &y) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_correlation_constant_sequence_is_zero() {
        let flat = [2.0, 2.0, 2.0];
        let ramp = [1.0, 2.0, 3.0];
        assert_eq!(pearson_correlation(&flat, &ramp), 0.0);
        assert_eq!(pearson_correlation(&flat, &flat), 0.0);
    }

    #[test]
    fn test_correlation_degenerate_inputs() {
        assert_eq!(pearson_correlation(&[], &[]), 0.0);
        assert_eq!(pearson_correlation(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_mse_identical_is_zero() {
        let x = [1.0, 2.0, 3.0];
        assert_eq!(mean_squared_error(&x, &x), 0.0);
    }

    #[test]
    fn test_mse_known_value() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 2.0, 5.0];
        // (1 + 0 + 4) / 3
        assert!((mean_squared_error(&x, &y) - 5.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_mse_symmetric() {
        let x = [1.0, -2.0, 3.5, 0.0];
        let y = [0.5, 2.0, -1.0, 4.0];
        assert_eq!(mean_squared_error(&x, &y), mean_squared_error(&y, &x));
    }

    #[test]
    fn test_mse_sentinel_on_degenerate_inputs() {
        assert!(mean_squared_error(&[], &[]).is_infinite());
        assert!(mean_squared_error(&[1.0], &[1.0, 2.0]).is_infinite());
    }

    #[test]
    fn test_ssim_identical_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((ssim(&x, &x) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ssim_identical_flat_is_one() {
        // Zero variance does not zero the denominator: the constants keep it
        // stable and identical flat sequences still score 1.
        let x = [3.0, 3.0, 3.0];
        assert!((ssim(&x, &x) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_ssim_bounded_for_dissimilar_sequences() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [4.0, 3.0, 2.0, 1.0];
        let s = ssim(&x, &y);
        assert!(s < 1.0);
        assert!(s.is_finite());
    }

    #[test]
    fn test_ssim_degenerate_inputs() {
        assert_eq!(ssim(&[], &[]), 0.0);
        assert_eq!(ssim(&[1.0], &[1.0, 2.0]), 0.0);
    }
}
