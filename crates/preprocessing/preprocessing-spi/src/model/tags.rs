//! Capability tag descriptor.

use super::TagValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known tag names.
pub mod keys {
    pub const NON_DETERMINISTIC: &str = "non_deterministic";
    pub const REQUIRES_POSITIVE_X: &str = "requires_positive_X";
    pub const REQUIRES_POSITIVE_Y: &str = "requires_positive_y";
    pub const X_TYPES: &str = "X_types";
    pub const POOR_SCORE: &str = "poor_score";
    pub const NO_VALIDATION: &str = "no_validation";
    pub const MULTIOUTPUT: &str = "multioutput";
    pub const ALLOW_NAN: &str = "allow_nan";
    pub const STATELESS: &str = "stateless";
    pub const MULTILABEL: &str = "multilabel";
    pub const SKIP_TEST: &str = "_skip_test";
    pub const XFAIL_CHECKS: &str = "_xfail_checks";
    pub const MULTIOUTPUT_ONLY: &str = "multioutput_only";
    pub const BINARY_ONLY: &str = "binary_only";
    pub const REQUIRES_FIT: &str = "requires_fit";
    pub const PRESERVES_DTYPE: &str = "preserves_dtype";
    pub const REQUIRES_Y: &str = "requires_y";
    pub const PAIRWISE: &str = "pairwise";
}

/// Mapping from capability name to value.
///
/// Merging is last-writer-wins per key and additive across maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags {
    entries: BTreeMap<String, TagValue>,
}

impl Tags {
    /// Empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tag set every estimator starts from.
    pub fn defaults() -> Self {
        Self::new()
            .with(keys::NON_DETERMINISTIC, false)
            .with(keys::REQUIRES_POSITIVE_X, false)
            .with(keys::REQUIRES_POSITIVE_Y, false)
            .with(keys::X_TYPES, vec!["2darray"])
            .with(keys::POOR_SCORE, false)
            .with(keys::NO_VALIDATION, false)
            .with(keys::MULTIOUTPUT, false)
            .with(keys::ALLOW_NAN, false)
            .with(keys::STATELESS, false)
            .with(keys::MULTILABEL, false)
            .with(keys::SKIP_TEST, false)
            .with(keys::XFAIL_CHECKS, false)
            .with(keys::MULTIOUTPUT_ONLY, false)
            .with(keys::BINARY_ONLY, false)
            .with(keys::REQUIRES_FIT, true)
            .with(keys::PRESERVES_DTYPE, vec!["float64"])
            .with(keys::REQUIRES_Y, false)
            .with(keys::PAIRWISE, false)
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(TagValue::as_bool)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Option<TagValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// By-value [`insert`](Self::insert), for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Append `value` to a list-valued tag.
    ///
    /// A missing key becomes a one-element list; a scalar is promoted to a
    /// list holding the old value followed by the new one.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        let value = value.into();
        let entry = self
            .entries
            .entry(key.into())
            .or_insert_with(|| TagValue::List(Vec::new()));
        match entry {
            TagValue::List(items) => items.push(value),
            scalar => {
                let old = std::mem::replace(scalar, TagValue::List(Vec::new()));
                *scalar = TagValue::List(vec![old, value]);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        self.entries.remove(key)
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(mut self, other: Tags) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<TagValue>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Tags {
    type Item = (String, TagValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
