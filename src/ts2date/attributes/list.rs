//! Attribute-list parsing.

use std::collections::BTreeSet;
use std::fmt;

/// Separator between attribute names in the configured list.
pub const LIST_SEPARATOR: char = ',';

/// A deduplicated set of attribute names to examine on each record.
///
/// Names are trimmed and never empty. Iteration is in sorted order so that
/// processing and log output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeNameSet {
    names: BTreeSet<String>,
}

impl AttributeNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name after trimming it. Returns `false` if the trimmed name is
    /// empty or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for AttributeNameSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl fmt::Display for AttributeNameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}

/// Parses a comma-separated attribute list.
///
/// Returns `None` when the input is blank, meaning no attributes are configured.
/// Otherwise each segment is trimmed and collected; empty segments are dropped,
/// so an input consisting only of separators yields an empty set.
pub fn parse_attribute_list(raw: &str) -> Option<AttributeNameSet> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.split(LIST_SEPARATOR).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_configured() {
        assert_eq!(parse_attribute_list(""), None);
        assert_eq!(parse_attribute_list("   "), None);
        assert_eq!(parse_attribute_list("\t\n"), None);
    }

    #[test]
    fn single_name() {
        let names = parse_attribute_list("a.test1").unwrap();
        assert_eq!(names.len(), 1);
        assert!(names.contains("a.test1"));
    }

    #[test]
    fn names_are_trimmed_and_deduplicated() {
        let names = parse_attribute_list(" a , b,a ,  b").unwrap();
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        let names = parse_attribute_list(",a,,b,").unwrap();
        assert_eq!(names.len(), 2);
        assert!(!names.contains(""));
    }

    #[test]
    fn separators_only_yield_empty_set() {
        let names = parse_attribute_list(" , ,").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let names = parse_attribute_list("first name, last").unwrap();
        assert!(names.contains("first name"));
        assert!(names.contains("last"));
    }

    #[test]
    fn insert_rejects_blank_names() {
        let mut names = AttributeNameSet::new();
        assert!(names.insert(" x "));
        assert!(!names.insert("x"));
        assert!(!names.insert("  "));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn display_joins_sorted_names() {
        let names = parse_attribute_list("b,a,c").unwrap();
        assert_eq!(names.to_string(), "a,b,c");
    }
}
