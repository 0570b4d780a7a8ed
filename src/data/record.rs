//! Data rows flowing through the query pipeline

use super::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single loosely typed data row
///
/// Fields keep insertion order so serialized results render columns in the
/// order the mock data defines them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create a new empty record
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Set a field value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Get a field value, treating an explicit null the same as an absent field
    pub fn get_non_null(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Check if a field is present (possibly null)
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// All fields in insertion order
    pub fn fields(&self) -> &IndexMap<String, FieldValue> {
        &self.fields
    }

    /// Convert to a JSON object for API responses
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        for (name, value) in &self.fields {
            obj.insert(name.clone(), value.to_json());
        }
        serde_json::Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_set_get() {
        let mut record = Record::new();
        record.set("status", "pending");
        record.set("quantityOnHand", 12i64);

        assert_eq!(record.get("status").and_then(|v| v.as_str()), Some("pending"));
        assert_eq!(record.get("quantityOnHand").and_then(|v| v.as_integer()), Some(12));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_get_non_null() {
        let mut record = Record::new();
        record.set("completionDate", FieldValue::Null);
        record.set("status", "open");

        assert!(record.has("completionDate"));
        assert!(record.get_non_null("completionDate").is_none());
        assert!(record.get_non_null("status").is_some());
    }

    #[test]
    fn test_to_json_preserves_order() {
        let mut record = Record::new();
        record.set("id", "a-1");
        record.set("amount", 10.5);

        let json = record.to_json();
        let obj = json.as_object().unwrap();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["id", "amount"]);
    }
}
