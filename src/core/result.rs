//! Scoring result types.
//!
//! [`ScoreResult`] is the full output contract of the engine and serializes
//! to the wire shape consumers expect: `overall`, `perLead`, `metrics`, and
//! an `error` field that only appears on structural failure.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error message reported when a record has no channel collection at all.
pub const MISSING_LEAD_DATA: &str = "Missing lead data";

/// Statistics pooled over the concatenation of every matched, truncated
/// channel pair. Distinct from the per-channel composites: pooling weights
/// long channels more heavily and crosses channel boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    /// Pearson correlation over all pooled samples
    pub correlation: f64,

    /// Mean squared error over all pooled samples; infinite when no pair
    /// was computable (serializes to JSON `null`)
    pub mse: f64,

    /// Single-window SSIM over all pooled samples
    pub ssim: f64,
}

/// Complete scoring result for one candidate record against a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Mean of the scorable channels' composite scores, in [0,100]
    pub overall: f64,

    /// Composite score per reference channel name. Channels with no
    /// scorable counterpart appear with 0 but do not contribute to
    /// `overall`.
    #[serde(rename = "perLead")]
    pub per_lead: BTreeMap<String, f64>,

    /// Pooled diagnostics, absent on structural failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<GlobalMetrics>,

    /// Structural failure message, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreResult {
    /// The result reported when either record lacks its channel collection
    #[must_use]
    pub fn missing_lead_data() -> Self {
        ScoreResult {
            overall: 0.0,
            per_lead: BTreeMap::new(),
            metrics: None,
            error: Some(MISSING_LEAD_DATA.to_string()),
        }
    }

    /// Whether this result reports a structural failure
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Quality grade derived from the overall score
    #[must_use]
    pub fn grade(&self) -> QualityGrade {
        QualityGrade::from_score(self.overall)
    }
}

/// Coarse quality bucket for an overall score, for human-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityGrade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityGrade {
    /// Bucket a score in [0,100]
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            QualityGrade::Excellent
        } else if score >= 75.0 {
            QualityGrade::Good
        } else if score >= 50.0 {
            QualityGrade::Fair
        } else {
            QualityGrade::Poor
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityGrade::Poor => "poor",
            QualityGrade::Fair => "fair",
            QualityGrade::Good => "good",
            QualityGrade::Excellent => "excellent",
        };
        write!(f, "{s}")
    }
}
