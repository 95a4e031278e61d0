//! Record and channel data model.
//!
//! Records arrive as JSON of the shape
//! `{"channels": [{"name": "I", "values": [0.1, 0.2, ...]}]}`. Upstream
//! digitizers produce degenerate payloads often enough that both the
//! channel collection and the per-channel samples are optional here; the
//! scoring engine resolves every absent piece to a defined outcome instead
//! of failing.

use serde::{Deserialize, Serialize};

/// One named time-series stream within a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel name (e.g. a lead label such as `"I"` or `"V1"`)
    pub name: String,

    /// Sample values, in time order. Absent when the digitizer could not
    /// recover this channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

impl Channel {
    /// Create a channel with the given samples
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Channel {
            name: name.into(),
            values: Some(values),
        }
    }

    /// Create a channel whose samples are absent
    pub fn without_values(name: impl Into<String>) -> Self {
        Channel {
            name: name.into(),
            values: None,
        }
    }

    /// Samples as a slice, empty when absent
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        self.values.as_deref().unwrap_or(&[])
    }

    /// Whether this channel carries at least one sample
    #[must_use]
    pub fn has_samples(&self) -> bool {
        self.values.as_ref().is_some_and(|v| !v.is_empty())
    }
}

/// A multi-channel record, either ground truth or a digitized candidate.
///
/// `channels` is `None` when the payload lacked the collection entirely.
/// That is the one structural failure the engine reports as an error;
/// an empty collection is merely a record with nothing to score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
}

impl Record {
    /// Create a record from a list of channels
    #[must_use]
    pub fn from_channels(channels: Vec<Channel>) -> Self {
        Record {
            channels: Some(channels),
        }
    }

    /// Number of channels present, zero when the collection is absent
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_samples_present() {
        let channel = Channel::new("I", vec![1.0, 2.0, 3.0]);
        assert_eq!(channel.samples(), &[1.0, 2.0, 3.0]);
        assert!(channel.has_samples());
    }

    #[test]
    fn test_channel_samples_absent() {
        let channel = Channel::without_values("I");
        assert!(channel.samples().is_empty());
        assert!(!channel.has_samples());
    }

    #[test]
    fn test_channel_empty_values_has_no_samples() {
        let channel = Channel::new("I", vec![]);
        assert!(!channel.has_samples());
    }

    #[test]
    fn test_record_channel_count() {
        let record = Record::from_channels(vec![
            Channel::new("I", vec![1.0]),
            Channel::new("II", vec![2.0]),
        ]);
        assert_eq!(record.channel_count(), 2);
    }

    #[test]
    fn test_record_without_channels() {
        let record = Record::default();
        assert!(record.channels.is_none());
        assert_eq!(record.channel_count(), 0);
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let record: Record =
            serde_json::from_str(r#"{"channels":[{"name":"I","values":[1.5,2.5]}]}"#).unwrap();
        let channels = record.channels.as_ref().unwrap();
        assert_eq!(channels[0].name, "I");
        assert_eq!(channels[0].samples(), &[1.5, 2.5]);
    }

    #[test]
    fn test_deserialize_channel_without_values() {
        let record: Record = serde_json::from_str(r#"{"channels":[{"name":"I"}]}"#).unwrap();
        assert!(!record.channels.as_ref().unwrap()[0].has_samples());
    }

    #[test]
    fn test_deserialize_empty_object() {
        let record: Record = serde_json::from_str("{}").unwrap();
        assert!(record.channels.is_none());
    }
}
