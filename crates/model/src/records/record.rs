use crate::core::value::Value;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
}

/// One row of domain data: field names mapped to scalar values, in the
/// order they were inserted.
///
/// Lookups are exact (case-sensitive). A field holding `Value::Null` reads
/// the same as a field that is not present at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub field_values: Vec<FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in fixtures.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Replaces the value of an existing field in place or appends a new one.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.field_values.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.field_values.push(FieldValue {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Returns the value of `field`, or `None` when it is absent or null.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.field_values
            .iter()
            .find(|f| f.name == field)
            .map(|f| &f.value)
            .filter(|v| !v.is_null())
    }

    /// Text form of `field`, or `None` when it is absent or null.
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(Value::as_text)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.field_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_values.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.field_values.iter().map(|f| f.name.as_str())
    }

    /// Builds a record from a JSON object, flattening nested values.
    /// Anything other than an object yields an empty record. Field order
    /// follows the map's iteration order; deserialize from text instead
    /// when source order matters.
    pub fn from_json(value: serde_json::Value) -> Self {
        let mut record = Record::new();
        if let serde_json::Value::Object(map) = value {
            for (name, value) in map {
                record.set(&name, Value::from(value));
            }
        }
        record
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            let name: String = name.into();
            record.set(&name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.field_values.len()))?;
        for field in &self.field_values {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut record = Record::new();
                while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
                    record.set(&name, Value::from(value));
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reads_as_missing() {
        let record = Record::new().with("nidn", Value::Null).with("name", "Siti");
        assert!(record.get("nidn").is_none());
        assert!(!record.contains("nidn"));
        assert_eq!(record.text("name"), Some("Siti".to_string()));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let record = Record::new().with("Name", "Andi");
        assert!(record.get("name").is_none());
        assert!(record.get("Name").is_some());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut record = Record::new().with("a", 1).with("b", 2);
        record.set("a", 3);
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_json_keeps_field_order() {
        let json = r#"{"zeta": 1, "alpha": "x", "mid": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"zeta":1,"alpha":"x","mid":null}"#
        );
    }
}
