//! # trace-score
//!
//! A library for scoring digitized multi-channel signal traces against a
//! ground-truth recording.
//!
//! When a paper or image waveform (e.g. a printed ECG) is digitized back
//! into numeric channels, the result is never a perfect copy of the source
//! signal. `trace-score` quantifies how faithful the digitization is: given
//! the ground-truth record and the candidate record, it produces one
//! composite quality score per channel in [0,100], an overall score for the
//! record, and pooled global diagnostics.
//!
//! ## Scoring
//!
//! Channels are paired by name and truncated to their common prefix length
//! (no resampling; both records must already be sampled comparably). Each
//! matched pair is scored as a fixed-weight combination of:
//!
//! - **Pearson correlation** (40%): shape agreement, offset-invariant
//! - **Normalized MSE** (30%): error scaled by the reference channel's
//!   squared peak amplitude, clamped at 1 before inversion
//! - **Simplified SSIM** (30%): single-window structural similarity with
//!   fixed stabilizing constants
//!
//! Channels with no scorable counterpart are reported with score 0 but
//! excluded from the overall average. A record lacking a channel collection
//! entirely short-circuits to an error result; every other degenerate input
//! degrades to a defined zero score, so callers never need exception
//! handling around the engine.
//!
//! ## Example
//!
//! ```rust
//! use trace_score::{score_records, Channel, Record};
//!
//! let reference = Record::from_channels(vec![
//!     Channel::new("I", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
//! ]);
//! let candidate = reference.clone();
//!
//! let result = score_records(&reference, &candidate);
//! assert!((result.overall - 100.0).abs() < 1e-6);
//! assert!(result.error.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: record, channel, and result data types
//! - [`scoring`]: statistics, per-channel scoring, matching, aggregation
//! - [`parsing`]: JSON and wide-TSV/CSV record loaders
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod scoring;

// Re-export commonly used types for convenience
pub use core::record::{Channel, Record};
pub use core::result::{GlobalMetrics, QualityGrade, ScoreResult, MISSING_LEAD_DATA};
pub use scoring::channel::ChannelScore;
pub use scoring::engine::score_records;
