//! Tag and confirmation label sets.
//!
//! Both are sets of strings: uniqueness is enforced on insert and the order
//! labels were added in carries no meaning (iteration is sorted).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Confirmation labels offered by the trade entry form.
pub const CONFIRMATION_OPTIONS: [&str; 15] = [
    "TF Alignment: Weekly",
    "TF Alignment: Daily",
    "TF Alignment: 4H",
    "TF Alignment: 1H",
    "TF Alignment: 15M",
    "SMT Divergence",
    "HTF Rebalance",
    "NDOG Rebalance",
    "BOS Confirmed",
    "Liquidity Grab",
    "OTE",
    "Breaker",
    "Fair Value Gap Filled",
    "Imbalance",
    "Killzone (NY/London)",
];

/// Set of free-text tag names.
///
/// Names are trimmed, blanks are dropped and duplicates are detected
/// case-insensitively; the first spelling seen is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a tag. Returns false if it was blank or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.insert(name.to_string())
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = tag_key(name);
        self.0.iter().any(|tag| tag_key(tag) == key)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tag names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(value: TagSet) -> Self {
        value.0.into_iter().collect()
    }
}

/// Grouping key for a tag name: trimmed and lowercased.
///
/// [`TagSet`] dedupes on this key, so keys within one set are unique.
#[must_use]
pub fn tag_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Set of confirmation labels recorded for a trade.
///
/// Labels are trimmed and de-duplicated exactly. Labels outside
/// [`CONFIRMATION_OPTIONS`] are kept but reported by [`Self::unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ConfirmationSet(BTreeSet<String>);

impl ConfirmationSet {
    /// Empty confirmation set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a label. Returns false if it was blank or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.0.insert(label.to_string())
    }

    /// Number of distinct confirmations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no confirmations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Labels not in the controlled vocabulary.
    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|label| !is_known_confirmation(label))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ConfirmationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for ConfirmationSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<ConfirmationSet> for Vec<String> {
    fn from(value: ConfirmationSet) -> Self {
        value.0.into_iter().collect()
    }
}

/// Check a label against [`CONFIRMATION_OPTIONS`].
#[must_use]
pub fn is_known_confirmation(label: &str) -> bool {
    CONFIRMATION_OPTIONS.contains(&label)
}
