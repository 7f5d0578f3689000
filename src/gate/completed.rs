//! The set of courses marked as passed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Course ids the user has marked complete.
///
/// Serializes as a plain JSON array of ids, sorted for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSet {
    ids: BTreeSet<String>,
}

impl CompletedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add an id. Returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Remove an id. Returns false if it was absent.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Copy of this set with membership of `id` flipped.
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.remove(id) {
            next.insert(id);
        }
        next
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_membership_without_mutating() {
        let set: CompletedSet = ["a"].into_iter().collect();

        let removed = set.toggled("a");
        assert!(!removed.contains("a"));
        assert!(set.contains("a"));

        let added = set.toggled("b");
        assert!(added.contains("a"));
        assert!(added.contains("b"));
    }

    #[test]
    fn serializes_as_sorted_json_array() {
        let set: CompletedSet = ["mat2", "fis1", "mat1"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["fis1","mat1","mat2"]"#);
    }

    #[test]
    fn deserializes_from_json_array_and_dedups() {
        let set: CompletedSet = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("b"));
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = CompletedSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(set.remove("a"));
        assert!(!set.remove("a"));
        assert!(set.is_empty());
    }
}
