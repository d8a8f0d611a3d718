//! Arm set labeling.
//!
//! Arms are opaque labeled choices ("configuration-a", "configuration-b", ...)
//! fixed for the lifetime of one episode. The policy and reward model address
//! arms by index into this set; labels exist for reporting.

use serde::{Deserialize, Serialize};

/// Ordered, immutable set of arm labels for one bandit episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmSet {
    labels: Vec<String>,
}

impl ArmSet {
    /// Build an arm set of `count` generated labels.
    ///
    /// The first 26 arms are lettered (`configuration-a` ..); beyond that
    /// labels fall back to numbering.
    pub fn with_count(count: usize) -> Self {
        let labels = (0..count)
            .map(|i| {
                if i < 26 {
                    let letter = (b'a' + i as u8) as char;
                    format!("configuration-{letter}")
                } else {
                    format!("configuration-{}", i + 1)
                }
            })
            .collect();
        Self { labels }
    }

    /// Build an arm set from explicit labels.
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Number of arms in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the set has no arms.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for an arm index, if the index is valid.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of a label, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Iterate labels in arm order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
