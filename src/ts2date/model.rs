use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Read/write access to a record's attributes.
///
/// This is the only view of a record the processor needs. Hosts with their own
/// record types implement it to run the processor without converting records.
pub trait AttributeRecord {
    /// Current value of an attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Set (or overwrite) an attribute value.
    fn put_attribute(&mut self, name: &str, value: String);
}

/// A record flowing through the filter: an opaque payload plus string attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    // Never read or written by the processor
    #[serde(default)]
    pub content: String,
}

impl Record {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            attributes: BTreeMap::new(),
            content: content.into(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl AttributeRecord for Record {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn put_attribute(&mut self, name: &str, value: String) {
        self.attributes.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_attributes() {
        let record = Record::new("body").with_attribute("a", "1");
        assert_eq!(record.attribute("a"), Some("1"));
        assert_eq!(record.attribute("b"), None);
        assert_eq!(record.content, "body");
    }

    #[test]
    fn put_attribute_overwrites() {
        let mut record = Record::new("").with_attribute("a", "1");
        record.put_attribute("a", "2".into());
        assert_eq!(record.attribute("a"), Some("2"));
        assert_eq!(record.attributes.len(), 1);
    }

    #[test]
    fn deserialize_fills_defaults() {
        let record: Record = serde_json::from_str(r#"{"attributes":{"a":"x"}}"#).unwrap();
        assert_eq!(record.attribute("a"), Some("x"));
        assert!(record.content.is_empty());
        assert!(!record.id.is_nil());
    }

    #[test]
    fn deserialize_keeps_given_id() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{}","content":"c"}}"#, id);
        let record: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record.id, id);
        assert!(record.attributes.is_empty());
    }
}
