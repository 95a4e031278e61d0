use std::path::Path;

use tracing::warn;

use crate::core::record::Record;
use crate::parsing::{check_limits, ParseError};

/// Parse a record from a JSON file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json`
/// if the content is not valid JSON of the record shape, or a limit error
/// if the record is oversized.
pub fn parse_json_file(path: &Path) -> Result<Record, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_json_text(&content)
}

/// Parse a record from JSON text of the shape
/// `{ "channels": [ { "name": ..., "values": [...] } ] }`.
///
/// A payload without a `channels` key parses successfully; the scoring
/// engine reports it as a structural failure.
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON, or a limit error if the
/// record is oversized.
pub fn parse_json_text(text: &str) -> Result<Record, ParseError> {
    let record: Record = serde_json::from_str(text)?;
    if record.channels.is_none() {
        warn!("payload has no channels collection; scoring will report missing lead data");
    }
    check_limits(&record)?;
    Ok(record)
}
