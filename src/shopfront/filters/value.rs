//! Filter values and the structured filter state.

use std::collections::BTreeMap;

use super::key::{FilterKey, FilterKind, SortKey};

/// The value held by one query parameter.
///
/// List keys hold either variant; scalar keys only ever hold `Single`.
/// A `Multi` is never empty: removing its last member removes the key.
///
/// Equality is set equality. `Single("red")` equals `Multi(["red"])`, and
/// neither order nor repeated members matter, because a query string cannot
/// tell a scalar from a one-element list.
#[derive(Debug, Clone)]
pub enum FilterValue {
    Single(String),
    Multi(Vec<String>),
}

impl FilterValue {
    /// Build a value from decoded parts.
    ///
    /// Returns `None` for an empty list. A single part becomes `Single` unless
    /// `keep_list` is set (the input was explicitly comma-joined).
    pub fn from_parts(mut parts: Vec<String>, keep_list: bool) -> Option<Self> {
        match parts.len() {
            0 => None,
            1 if !keep_list => parts.pop().map(FilterValue::Single),
            _ => Some(FilterValue::Multi(parts)),
        }
    }

    /// All held values; a `Single` is a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            FilterValue::Single(value) => std::slice::from_ref(value),
            FilterValue::Multi(values) => values,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.as_slice().iter().any(|v| v == value)
    }

    /// Number of held entries, repeats included.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The value of a scalar. For a list, the most recently added member.
    pub fn last(&self) -> Option<&str> {
        self.as_slice().last().map(String::as_str)
    }

    pub fn into_values(self) -> Vec<String> {
        match self {
            FilterValue::Single(value) => vec![value],
            FilterValue::Multi(values) => values,
        }
    }
}

impl PartialEq for FilterValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice().iter().all(|v| other.contains(v))
            && other.as_slice().iter().all(|v| self.contains(v))
    }
}

impl Eq for FilterValue {}

/// The structured form of a storefront query string.
///
/// Operations never mutate a state in place; the functions in
/// [`state`](super::state) return a new `FilterState` each time. Keys are kept
/// in [`FilterKey`] order so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub(super) entries: BTreeMap<FilterKey, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used to assemble a state directly.
    ///
    /// Keeps the state invariants: an empty value removes the key, and a
    /// scalar key given several values keeps only the last one.
    pub fn with(mut self, key: FilterKey, value: FilterValue) -> Self {
        let value = match (key.kind(), value) {
            (_, value) if value.is_empty() => {
                self.entries.remove(&key);
                return self;
            }
            (FilterKind::Scalar, FilterValue::Multi(mut values)) => match values.pop() {
                Some(last) => FilterValue::Single(last),
                None => return self,
            },
            (_, value) => value,
        };
        self.entries.insert(key, value);
        self
    }

    pub(super) fn insert(mut self, key: FilterKey, value: FilterValue) -> Self {
        self.entries.insert(key, value);
        self
    }

    pub(super) fn without(mut self, key: FilterKey) -> Self {
        self.entries.remove(&key);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.entries.get(&key)
    }

    pub fn contains_key(&self, key: FilterKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Values held by `key`, empty when the key is absent.
    pub fn values(&self, key: FilterKey) -> &[String] {
        self.get(key).map(FilterValue::as_slice).unwrap_or_default()
    }

    /// The value of a scalar key.
    pub fn scalar(&self, key: FilterKey) -> Option<&str> {
        self.get(key).and_then(FilterValue::last)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &FilterValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Requested ordering; absent or unrecognized means `Featured`.
    pub fn sort_key(&self) -> SortKey {
        self.scalar(FilterKey::Sort)
            .map(SortKey::from_param)
            .unwrap_or_default()
    }

    /// Inclusive price bounds, if either bound is set.
    ///
    /// A missing or unreadable lower bound is 0 and a missing or unreadable
    /// upper bound is infinity.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let min = self.scalar(FilterKey::MinPrice);
        let max = self.scalar(FilterKey::MaxPrice);
        if min.is_none() && max.is_none() {
            return None;
        }
        let min = min.and_then(|v| v.parse::<f64>().ok()).unwrap_or(0.0);
        let max = max
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(f64::INFINITY);
        Some((min, max))
    }

    /// Requested page, when it is a positive integer.
    pub fn page(&self) -> Option<u32> {
        self.scalar(FilterKey::Page)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|page| *page > 0)
    }
}
