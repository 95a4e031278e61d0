//! Signal-accuracy scoring engine.
//!
//! This module implements the core comparison of a candidate record against
//! a ground-truth reference:
//!
//! - [`stats`]: pairwise correlation, mean squared error, and simplified
//!   SSIM over two equal-length sequences
//! - [`channel`]: the per-channel composite score combining the three
//!   statistics with fixed 0.4/0.3/0.3 weights
//! - [`matcher`]: name-based channel pairing with truncation-only alignment
//! - [`engine`]: the [`score_records`] entry point, overall aggregation,
//!   and pooled global diagnostics
//!
//! ## Two "overall" semantics
//!
//! The engine reports two deliberately distinct aggregate outputs: the
//! overall score (arithmetic mean of per-channel composites) and the global
//! metrics (statistics over all matched samples pooled into one sequence).
//! They answer different questions and are never unified into one number.
//!
//! ## Example
//!
//! ```rust
//! use trace_score::{score_records, Channel, Record};
//!
//! let reference = Record::from_channels(vec![Channel::new("I", vec![1.0, 2.0, 3.0])]);
//! let candidate = reference.clone();
//!
//! let result = score_records(&reference, &candidate);
//! assert!((result.overall - 100.0).abs() < 1e-6);
//! assert!((result.per_lead["I"] - 100.0).abs() < 1e-6);
//! ```

pub mod channel;
pub mod engine;
pub mod matcher;
pub mod stats;

pub use channel::ChannelScore;
pub use engine::score_records;
pub use matcher::{match_channels, ChannelPairing, MatchedPair};
