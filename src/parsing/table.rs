use std::path::Path;

use crate::core::record::{Channel, Record};
use crate::parsing::{check_limits, ParseError};

/// Parse a wide-format TSV/CSV file: a header row of channel names followed
/// by one sample row per time step, one column per channel.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_table_file(path: &Path, delimiter: char) -> Result<Record, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content, delimiter)
}

/// Parse wide-format TSV/CSV text.
///
/// The first non-empty, non-comment line is the header of channel names.
/// Blank cells are allowed and simply end that channel's column early
/// (channels may have different lengths; the matcher truncates later).
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the header is missing, a row has
/// more fields than the header, or a cell is not numeric; or a limit error
/// if the record is oversized.
pub fn parse_table_text(text: &str, delimiter: char) -> Result<Record, ParseError> {
    let mut names: Option<Vec<String>> = None;
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields: Vec<&str> = line.split(delimiter).collect();

        let Some(names) = &names else {
            let header: Vec<String> = fields.iter().map(|f| f.trim().to_string()).collect();
            if header.iter().any(String::is_empty) {
                return Err(ParseError::InvalidFormat(format!(
                    "Header on line {line_num} contains an empty channel name"
                )));
            }
            columns = vec![Vec::new(); header.len()];
            names = Some(header);
            continue;
        };

        if fields.len() > names.len() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields but the header names {} channels",
                fields.len(),
                names.len()
            )));
        }

        for (column, field) in columns.iter_mut().zip(&fields) {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let value: f64 = field.parse().map_err(|_| {
                ParseError::InvalidFormat(format!(
                    "Invalid sample value on line {line_num}: '{field}'"
                ))
            })?;
            column.push(value);
        }
    }

    let Some(names) = names else {
        return Err(ParseError::InvalidFormat(
            "No header row of channel names found".to_string(),
        ));
    };

    let channels = names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Channel::new(name, values))
        .collect();

    let record = Record::from_channels(channels);
    check_limits(&record)?;
    Ok(record)
}
