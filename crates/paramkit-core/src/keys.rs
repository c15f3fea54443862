//! Field names excluded from parameter generation.
//!
//! [`KnownKeys`] are the descriptor's own structural fields and never become
//! parameters or path substitutions. [`PlaceholderSet`] holds the identifiers
//! bound by a path template. Together they form the [`ExclusionSet`] applied
//! to a descriptor's top-level fields.

use serde::{Deserialize, Serialize};

/// Structural descriptor fields ignored by default
pub const KNOWN_KEYS: [&str; 4] = ["path", "method", "parameters", "sampleData"];

/// Field names that are never turned into parameters or path substitutions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownKeys(Vec<String>);

impl KnownKeys {
    /// Create a key set from arbitrary names
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Whether `key` is one of the known keys
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    /// Known keys in configured order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of known keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key is excluded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KnownKeys {
    fn default() -> Self {
        Self::new(KNOWN_KEYS)
    }
}

/// Distinct placeholder identifiers in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlaceholderSet(Vec<String>);

impl PlaceholderSet {
    /// Append `key` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.0.push(key.to_string());
        true
    }

    /// Whether `key` was found in the template
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    /// Identifiers in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Identifiers as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the set, returning the identifiers
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the template has no placeholders
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Known keys plus the path keys of one template
#[derive(Debug, Clone)]
pub struct ExclusionSet<'a> {
    known: &'a KnownKeys,
    path_keys: PlaceholderSet,
}

impl<'a> ExclusionSet<'a> {
    /// Combine known keys with the path keys of a template
    pub fn new(known: &'a KnownKeys, path_keys: PlaceholderSet) -> Self {
        Self { known, path_keys }
    }

    /// Whether a top-level field named `key` is excluded
    pub fn contains(&self, key: &str) -> bool {
        self.known.contains(key) || self.path_keys.contains(key)
    }
}
