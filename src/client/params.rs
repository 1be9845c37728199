//! Request parameter sets.

use std::collections::btree_map::{self, BTreeMap};

use crate::{Error, Result};

/// An ordered, multi-valued set of request fields.
///
/// Keys iterate in lexicographic byte order, which is the order the request
/// signature is computed in. Each key may carry several values; only the
/// first participates in the signature, while all of them are sent on the
/// wire.
///
/// # Example
///
/// ```
/// use baidupush_rs::ParameterSet;
///
/// let params = ParameterSet::new()
///     .with("msg_type", "1")
///     .with("expires", "1700000000");
///
/// assert_eq!(params.get("msg_type"), Some("1"));
/// assert_eq!(params.keys().collect::<Vec<_>>(), vec!["expires", "msg_type"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<String, Vec<String>>);

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single value, replacing anything already stored.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to a single value, replacing anything already stored.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), vec![value.to_string()]);
    }

    /// Append a value to `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.entry(key.into()).or_default().push(value.to_string());
    }

    /// The first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values stored under `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Remove `key` and return its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no keys are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into this set. Keys present in `other` replace the
    /// values stored here.
    pub fn absorb(&mut self, other: ParameterSet) {
        self.0.extend(other.0);
    }

    /// Flatten into `(key, value)` pairs, one per value, in key order.
    pub(crate) fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .flat_map(|(key, values)| {
                values
                    .iter()
                    .map(move |value| (key.as_str(), value.as_str()))
            })
            .collect()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub(crate) fn encode(&self) -> Result<String> {
        serde_urlencoded::to_string(self.pairs())
            .map_err(|e| Error::InvalidParameter(format!("cannot encode parameters: {}", e)))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
