//! Score command - compare a candidate record against a reference record.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::Record;
use crate::core::result::ScoreResult;
use crate::parsing;
use crate::scoring::score_records;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Ground-truth record (JSON, TSV, or CSV)
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Digitized record to score against the reference (JSON, TSV, or CSV)
    #[arg(required = true)]
    pub candidate: PathBuf,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed. Structurally
/// unusable records (no channel collection) are not an error here: the
/// engine reports them through the result's `error` field.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let reference = parse_input(&args.reference)?;
    let candidate = parse_input(&args.candidate)?;

    if verbose {
        eprintln!(
            "Reference: {} channels, Candidate: {} channels",
            reference.channel_count(),
            candidate.channel_count(),
        );
    }

    let result = score_records(&reference, &candidate);

    match format {
        OutputFormat::Text => print_text_result(&args, &result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

fn parse_input(path: &Path) -> anyhow::Result<Record> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    let record = match ext.as_deref() {
        Some("tsv" | "txt") => parsing::table::parse_table_file(path, '\t')?,
        Some("csv") => parsing::table::parse_table_file(path, ',')?,
        // Default to the JSON wire shape
        _ => parsing::json::parse_json_file(path)?,
    };
    Ok(record)
}

fn print_text_result(args: &ScoreArgs, result: &ScoreResult) {
    println!(
        "\nScoring: {} vs {}",
        args.candidate.display(),
        args.reference.display()
    );

    if let Some(error) = &result.error {
        println!("\n   Error: {error}");
        return;
    }

    println!(
        "\n   Overall: {:.1} / 100 ({})",
        result.overall,
        result.grade()
    );

    if result.per_lead.is_empty() {
        println!("\n   No channels to score");
    } else {
        println!("\n   Leads:");
        for (name, score) in &result.per_lead {
            println!("      {name:<8} {score:>6.1}");
        }
    }

    if let Some(metrics) = &result.metrics {
        println!(
            "\n   Global: correlation {:.4}, mse {:.4}, ssim {:.4}",
            metrics.correlation, metrics.mse, metrics.ssim,
        );
    }
}

fn print_tsv_result(result: &ScoreResult) {
    println!("kind\tname\tvalue");

    if let Some(error) = &result.error {
        println!("error\t-\t{error}");
    }
    println!("overall\t-\t{:.4}", result.overall);

    for (name, score) in &result.per_lead {
        println!("lead\t{name}\t{score:.4}");
    }

    if let Some(metrics) = &result.metrics {
        println!("metric\tcorrelation\t{:.4}", metrics.correlation);
        println!("metric\tmse\t{:.4}", metrics.mse);
        println!("metric\tssim\t{:.4}", metrics.ssim);
    }
}
