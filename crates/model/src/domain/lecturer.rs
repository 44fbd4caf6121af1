use crate::{core::value::Value, records::record::Record};
use serde::{Deserialize, Serialize};

/// A lecturer ("dosen") as kept by the staff administration pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
    pub id: i64,
    /// National lecturer number. Not every lecturer has one yet.
    pub nidn: Option<String>,
    pub name: String,
    pub expertise: String,
    pub academic_rank: i64,
    pub is_active: bool,
}

impl Lecturer {
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id)
            .with("nidn", self.nidn.clone())
            .with("name", self.name.as_str())
            .with("expertise", self.expertise.as_str())
            .with("academic_rank", self.academic_rank)
            .with("is_active", self.is_active)
    }

    /// Reads a lecturer back from a record. Returns `None` when the name is
    /// missing; other fields fall back to empty or zero values.
    pub fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            id: record.get("id").and_then(Value::as_i64).unwrap_or_default(),
            nidn: record.text("nidn"),
            name: record.text("name")?,
            expertise: record.text("expertise").unwrap_or_default(),
            academic_rank: record
                .get("academic_rank")
                .and_then(Value::as_i64)
                .unwrap_or_default(),
            is_active: record
                .get("is_active")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        })
    }
}

impl From<&Lecturer> for Record {
    fn from(lecturer: &Lecturer) -> Self {
        lecturer.to_record()
    }
}
