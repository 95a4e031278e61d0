//! Parsers for loading multi-channel records from files.
//!
//! The scoring engine itself consumes in-memory [`Record`]s; this module is
//! the boundary where file content becomes records:
//!
//! - [`json`]: the wire shape used by the digitization pipeline,
//!   `{ "channels": [ { "name": ..., "values": [...] } ] }`
//! - [`table`]: wide TSV/CSV, one column per channel with a header row of
//!   channel names and one sample row per time step
//!
//! Parsers enforce input limits ([`MAX_CHANNELS`], [`MAX_SAMPLES`]) so a
//! hostile file cannot exhaust memory. Note that a JSON payload *lacking*
//! the `channels` collection is not a parse error: it deserializes to a
//! record the engine scores as a structural failure, keeping the error
//! contract in one place.
//!
//! [`Record`]: crate::core::Record

use thiserror::Error;

use crate::core::record::Record;

pub mod json;
pub mod table;

/// Maximum number of channels allowed in a single record.
pub const MAX_CHANNELS: usize = 256;

/// Maximum number of samples allowed in a single channel.
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Too many channels: {0} exceeds maximum allowed ({MAX_CHANNELS})")]
    TooManyChannels(usize),

    #[error("Channel '{0}' has too many samples: {1} exceeds maximum allowed ({MAX_SAMPLES})")]
    TooManySamples(String, usize),
}

/// Enforce channel and sample limits on a parsed record.
///
/// # Errors
///
/// Returns `ParseError::TooManyChannels` or `ParseError::TooManySamples`
/// when a limit is exceeded.
pub fn check_limits(record: &Record) -> Result<(), ParseError> {
    let Some(channels) = &record.channels else {
        return Ok(());
    };

    if channels.len() > MAX_CHANNELS {
        return Err(ParseError::TooManyChannels(channels.len()));
    }
    for channel in channels {
        let count = channel.samples().len();
        if count > MAX_SAMPLES {
            return Err(ParseError::TooManySamples(channel.name.clone(), count));
        }
    }
    Ok(())
}
