use crate::scoring::stats::{mean_squared_error, pearson_correlation, ssim};

/// Weight of the correlation term in the composite score.
pub const WEIGHT_CORRELATION: f64 = 0.4;

/// Weight of the inverted normalized-MSE term in the composite score.
pub const WEIGHT_MSE: f64 = 0.3;

/// Weight of the SSIM term in the composite score.
pub const WEIGHT_SSIM: f64 = 0.3;

/// Detailed similarity statistics for one matched channel pair.
///
/// The composite is the single [0,100] quality number; the component
/// statistics are kept alongside so callers can show a breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelScore {
    /// Pearson correlation between the two sequences.
    pub correlation: f64,

    /// Raw mean squared error (infinite on degenerate input).
    pub mse: f64,

    /// MSE divided by the squared peak absolute amplitude of the
    /// *reference* sequence; 0 when the reference is entirely zero.
    pub normalized_mse: f64,

    /// Single-window structural similarity.
    pub ssim: f64,

    /// `100 × (0.4·corr + 0.3·(1 − min(normalized_mse, 1)) + 0.3·ssim)`,
    /// clamped to [0,100].
    pub composite: f64,
}

impl ChannelScore {
    /// Score one matched channel pair. Both slices must already be
    /// truncated to their common prefix length by the matcher.
    ///
    /// Normalizing by the reference peak makes the error term
    /// unit-comparable across channels of different scale; the `min(_, 1)`
    /// clamp before inversion keeps a single badly-scaled channel from
    /// driving the composite below its floor contribution.
    #[must_use]
    pub fn calculate(reference: &[f64], candidate: &[f64]) -> Self {
        let correlation = pearson_correlation(reference, candidate);
        let mse = mean_squared_error(reference, candidate);
        let ssim = ssim(reference, candidate);

        let peak = peak_amplitude(reference);
        let normalized_mse = if peak == 0.0 { 0.0 } else { mse / (peak * peak) };

        let composite = 100.0
            * (WEIGHT_CORRELATION * correlation
                + WEIGHT_MSE * (1.0 - normalized_mse.min(1.0))
                + WEIGHT_SSIM * ssim);

        Self {
            correlation,
            mse,
            normalized_mse,
            ssim,
            composite: composite.clamp(0.0, 100.0),
        }
    }
}

/// Maximum absolute sample value, 0.0 for an empty sequence.
fn peak_amplitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |peak, v| peak.max(v.abs()))
}
