//! Core data types for signal-accuracy scoring.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Channel`]: one named time-series stream with optional samples
//! - [`Record`]: the multi-channel container being scored (ground-truth or
//!   candidate; both sides use the identical shape)
//! - [`ScoreResult`]: per-channel and overall scores plus pooled diagnostics
//! - [`GlobalMetrics`], [`QualityGrade`]: result detail types
//!
//! ## Alignment precondition
//!
//! The engine performs no resampling or time-alignment: two channels are
//! compared over their common prefix length only. Callers are responsible
//! for producing both records at comparable sampling before scoring.

pub mod record;
pub mod result;

pub use record::{Channel, Record};
pub use result::{GlobalMetrics, QualityGrade, ScoreResult, MISSING_LEAD_DATA};
