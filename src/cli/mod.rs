//! Command-line interface for trace-score.
//!
//! This module implements the CLI using clap. The binary is a thin
//! orchestration layer over the pure scoring library: it loads the two
//! records, invokes the engine once, and renders the result.
//!
//! ## Usage
//!
//! ```text
//! # Score a digitized record against its ground truth
//! trace-score score truth.json digitized.json
//!
//! # JSON output for scripting
//! trace-score score truth.json digitized.json --format json
//!
//! # Wide TSV/CSV inputs (header row of channel names)
//! trace-score score truth.tsv digitized.csv
//! ```

use clap::{Parser, Subcommand};

pub mod score;

#[derive(Parser)]
#[command(name = "trace-score")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Score digitized multi-channel signal traces against a ground-truth recording")]
#[command(
    long_about = "trace-score compares a digitized multi-channel record against a ground-truth recording.\n\nFor each channel shared by name it combines Pearson correlation, peak-normalized mean squared error, and a single-window structural similarity index into one [0,100] quality score, then reports:\n- a composite score per channel\n- the overall record score (mean of scorable channels)\n- pooled global diagnostics over all matched samples\n\nThe two records must already be sampled comparably: alignment is by truncation to the common prefix, never by resampling."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate record against a reference record
    Score(score::ScoreArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
