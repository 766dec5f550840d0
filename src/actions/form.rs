//! Submitted form fields.

use serde::Deserialize;
use std::collections::HashMap;

/// Key-value pairs submitted by an HTML form.
///
/// Missing keys read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns a field with surrounding whitespace removed.
    #[must_use]
    pub fn field(&self, key: &str) -> &str {
        self.raw(key).trim()
    }

    /// Reads a checkbox-style field.
    ///
    /// `true`, `on`, and `1` (any case) are set; everything else, including
    /// a missing key, is unset.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        ["true", "on", "1"]
            .iter()
            .any(|set| self.field(key).eq_ignore_ascii_case(set))
    }

    /// Returns a field exactly as submitted.
    #[must_use]
    pub fn raw(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
