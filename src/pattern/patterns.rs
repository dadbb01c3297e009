//! Ordered collection of rest patterns.

use super::method::HttpMethod;
use super::rest_pattern::RestPattern;

/// An ordered, append-only list of [`RestPattern`]s.
///
/// Insertion order is preserved and duplicates are kept. Every way of
/// building one copies its input, so later changes to the source never
/// show up here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestPatterns {
    values: Vec<RestPattern>,
}

impl RestPatterns {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed from a slice, preserving order.
    pub fn from_slice(values: &[RestPattern]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn any_matches(&self, method: HttpMethod, path: &str) -> bool {
        self.values.iter().any(|pattern| pattern.matches(method, path))
    }

    pub fn none_matches(&self, method: HttpMethod, path: &str) -> bool {
        !self.any_matches(method, path)
    }

    /// Append copies of every pattern in `other`, after the current ones.
    pub fn add_all(&mut self, other: &RestPatterns) {
        self.values.extend(other.values.iter().cloned());
    }

    /// Templates of the contained patterns, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.values.iter().map(RestPattern::template).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RestPattern> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<RestPattern>> for RestPatterns {
    fn from(values: Vec<RestPattern>) -> Self {
        Self { values }
    }
}

impl FromIterator<RestPattern> for RestPatterns {
    fn from_iter<I: IntoIterator<Item = RestPattern>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<RestPattern> for RestPatterns {
    fn extend<I: IntoIterator<Item = RestPattern>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RestPatterns {
    type Item = &'a RestPattern;
    type IntoIter = std::slice::Iter<'a, RestPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
