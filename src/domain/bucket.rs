use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown bucket label: {0}")]
pub struct UnknownBucketError(pub String);

/// Feasibility buckets. Variants are declared in report display order, which
/// is also their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BucketKey {
    SipNotNeeded,
    SkewedMeetsViaMethod12,
    SkewedMeetsOnlyViaRebalancing,
    SkewedCannotMeet,
    BalancedCannotMeet,
    CorpusOrSipTooLow,
}

#[derive(Debug)]
pub struct BucketInfo {
    pub key: BucketKey,
    pub label: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

/// Indexed by `BucketKey as usize`.
pub static BUCKETS: [BucketInfo; 6] = [
    BucketInfo {
        key: BucketKey::SipNotNeeded,
        label: "7",
        title: "SIP not needed",
        summary: "The existing corpus already covers all basic goals, so no SIP is required.",
    },
    BucketInfo {
        key: BucketKey::SkewedMeetsViaMethod12,
        label: "4",
        title: "Skewed corpus, can meet via method 1/2",
        summary: "The corpus is concentrated in some goal buckets, but method 1 or method 2 still meets all basic goals.",
    },
    BucketInfo {
        key: BucketKey::SkewedMeetsOnlyViaRebalancing,
        label: "5",
        title: "Skewed corpus, can meet only via rebalancing",
        summary: "The corpus is concentrated in some goal buckets and only rebalancing (method 3) meets all basic goals.",
    },
    BucketInfo {
        key: BucketKey::SkewedCannotMeet,
        label: "3",
        title: "Skewed corpus, cannot meet",
        summary: "The corpus is concentrated in some goal buckets and no method meets all basic goals.",
    },
    BucketInfo {
        key: BucketKey::BalancedCannotMeet,
        label: "6",
        title: "Balanced corpus, cannot meet",
        summary: "The corpus is spread evenly across goals, yet no method meets all basic goals.",
    },
    BucketInfo {
        key: BucketKey::CorpusOrSipTooLow,
        label: "1/2",
        title: "Corpus or SIP too low",
        summary: "The corpus or the SIP is too low for any method to meet all basic goals.",
    },
];

impl BucketKey {
    pub const ALL: [BucketKey; 6] = [
        BucketKey::SipNotNeeded,
        BucketKey::SkewedMeetsViaMethod12,
        BucketKey::SkewedMeetsOnlyViaRebalancing,
        BucketKey::SkewedCannotMeet,
        BucketKey::BalancedCannotMeet,
        BucketKey::CorpusOrSipTooLow,
    ];

    pub fn info(self) -> &'static BucketInfo {
        &BUCKETS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    pub fn summary_sentence(self) -> &'static str {
        self.info().summary
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BucketKey {
    type Err = UnknownBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        BUCKETS
            .iter()
            .find(|info| info.label == label)
            .map(|info| info.key)
            .ok_or_else(|| UnknownBucketError(s.to_string()))
    }
}

impl TryFrom<String> for BucketKey {
    type Error = UnknownBucketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BucketKey> for String {
    fn from(key: BucketKey) -> Self {
        key.label().to_string()
    }
}

/// Scenario count per bucket. Built through [`BucketCounts::tally`] every
/// bucket is present, so iteration always yields all six in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketCounts(BTreeMap<BucketKey, usize>);

impl BucketCounts {
    pub fn tally<I>(buckets: I) -> Self
    where
        I: IntoIterator<Item = BucketKey>,
    {
        let mut counts: BTreeMap<BucketKey, usize> =
            BucketKey::ALL.iter().map(|key| (*key, 0)).collect();
        for bucket in buckets {
            *counts.entry(bucket).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, key: BucketKey) -> usize {
        self.0.get(&key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// First bucket with no entry, if any. Only possible for counts read back
    /// from a document.
    pub fn missing_bucket(&self) -> Option<BucketKey> {
        BucketKey::ALL
            .iter()
            .copied()
            .find(|key| !self.0.contains_key(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BucketKey, usize)> + '_ {
        self.0.iter().map(|(key, count)| (*key, *count))
    }
}
