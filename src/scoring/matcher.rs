use std::collections::{HashMap, HashSet};

use crate::core::record::Channel;

/// One reference/candidate channel pair, truncated to the common prefix.
#[derive(Debug, Clone, Copy)]
pub struct MatchedPair<'a> {
    /// Channel name shared by both sides.
    pub name: &'a str,

    /// Reference samples, truncated to the shorter of the two lengths.
    pub reference: &'a [f64],

    /// Candidate samples, truncated to the same length.
    pub candidate: &'a [f64],
}

/// Outcome of pairing a reference record's channels with a candidate's.
///
/// The split between `matched` and `unscorable` isolates the asymmetric
/// missing-channel policy in one place: unscorable channels are reported
/// with a zero score but excluded from the overall average's denominator,
/// so they neither raise nor lower it through inclusion. This asymmetry is
/// intentional and must not be "fixed" into fully-zero-penalizing or
/// fully-ignoring behavior.
#[derive(Debug, Default)]
pub struct ChannelPairing<'a> {
    /// Pairs with non-empty samples on both sides; these feed the
    /// statistics calculators and the overall average.
    pub matched: Vec<MatchedPair<'a>>,

    /// Reference channel names with no scorable candidate counterpart:
    /// missing on the candidate side, or an absent or empty sample sequence
    /// on either side.
    pub unscorable: Vec<&'a str>,
}

/// Pair reference channels with same-named candidate channels.
///
/// Candidate lookup is a first-seen-wins name index, so a duplicate name on
/// the candidate side resolves to its first occurrence. Duplicate names on
/// the reference side are likewise processed once, at their first position;
/// later duplicates are silently unreachable.
///
/// Mismatched lengths are resolved by truncating both sides to the shorter
/// length, never by error; no interpolation or resampling is performed.
#[must_use]
pub fn match_channels<'a>(
    reference: &'a [Channel],
    candidate: &'a [Channel],
) -> ChannelPairing<'a> {
    let mut candidate_by_name: HashMap<&str, &Channel> = HashMap::new();
    for channel in candidate {
        candidate_by_name.entry(&channel.name).or_insert(channel);
    }

    let mut pairing = ChannelPairing::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for ref_channel in reference {
        if !seen.insert(ref_channel.name.as_str()) {
            continue;
        }

        let counterpart = candidate_by_name.get(ref_channel.name.as_str());
        let (Some(counterpart), true) = (counterpart, ref_channel.has_samples()) else {
            pairing.unscorable.push(&ref_channel.name);
            continue;
        };
        if !counterpart.has_samples() {
            pairing.unscorable.push(&ref_channel.name);
            continue;
        }

        let ref_samples = ref_channel.samples();
        let cand_samples = counterpart.samples();
        let common = ref_samples.len().min(cand_samples.len());

        pairing.matched.push(MatchedPair {
            name: &ref_channel.name,
            reference: &ref_samples[..common],
            candidate: &cand_samples[..common],
        });
    }

    pairing
}
