use std::collections::BTreeMap;

use crate::core::record::Record;
use crate::core::result::{GlobalMetrics, ScoreResult};
use crate::scoring::channel::ChannelScore;
use crate::scoring::matcher::{match_channels, ChannelPairing};
use crate::scoring::stats::{mean_squared_error, pearson_correlation, ssim};

/// Score a candidate record against a reference record.
///
/// This is the single entry point of the engine: a pure, synchronous
/// computation with no shared state and no I/O. Inputs are never mutated,
/// and every invocation is independent, so concurrent scoring of many
/// record pairs needs no coordination from the caller.
///
/// The two sequences of each matched channel are compared over their common
/// prefix only; callers must align sampling upstream (see
/// [`crate::core`]). The only fatal path is a record lacking a channel
/// collection entirely, which yields the
/// [`MISSING_LEAD_DATA`](crate::core::result::MISSING_LEAD_DATA) error
/// result with no statistics computed. Every other degenerate input
/// degrades to a defined zero score.
#[must_use]
pub fn score_records(reference: &Record, candidate: &Record) -> ScoreResult {
    let (Some(reference_channels), Some(candidate_channels)) =
        (&reference.channels, &candidate.channels)
    else {
        return ScoreResult::missing_lead_data();
    };

    let pairing = match_channels(reference_channels, candidate_channels);
    tracing::debug!(
        matched = pairing.matched.len(),
        unscorable = pairing.unscorable.len(),
        "channel pairing complete"
    );

    let mut per_lead: BTreeMap<String, f64> = BTreeMap::new();
    let mut composite_sum = 0.0;
    for pair in &pairing.matched {
        let score = ChannelScore::calculate(pair.reference, pair.candidate);
        composite_sum += score.composite;
        per_lead.insert(pair.name.to_string(), score.composite);
    }

    // Unscorable channels are reported as 0 but deliberately excluded from
    // the average's denominator (see matcher docs).
    for name in &pairing.unscorable {
        per_lead.insert((*name).to_string(), 0.0);
    }

    let overall = if pairing.matched.is_empty() {
        0.0
    } else {
        (composite_sum / matched_count_f64(&pairing)).clamp(0.0, 100.0)
    };

    ScoreResult {
        overall,
        per_lead,
        metrics: Some(global_metrics(&pairing)),
        error: None,
    }
}

/// Pooled diagnostics over the concatenation of all matched, truncated
/// channel pairs.
///
/// These are computed once over the pooled samples, not as an average of
/// per-channel statistics; they measure signal-level agreement and are a
/// distinct output from the channel-averaged overall score.
fn global_metrics(pairing: &ChannelPairing<'_>) -> GlobalMetrics {
    let pooled_len: usize = pairing.matched.iter().map(|p| p.reference.len()).sum();
    let mut pooled_reference = Vec::with_capacity(pooled_len);
    let mut pooled_candidate = Vec::with_capacity(pooled_len);
    for pair in &pairing.matched {
        pooled_reference.extend_from_slice(pair.reference);
        pooled_candidate.extend_from_slice(pair.candidate);
    }

    GlobalMetrics {
        correlation: pearson_correlation(&pooled_reference, &pooled_candidate),
        mse: mean_squared_error(&pooled_reference, &pooled_candidate),
        ssim: ssim(&pooled_reference, &pooled_candidate),
    }
}

#[inline]
fn matched_count_f64(pairing: &ChannelPairing<'_>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        pairing.matched.len() as f64
    }
}
