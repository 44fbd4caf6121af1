use crate::{core::value::Value, domain::status::UserStatus, records::record::Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    /// Student registration number.
    pub nim: String,
    pub name: String,
    pub faculty: String,
    pub program: String,
    pub entry_year: i64,
    pub status: UserStatus,
}

impl Student {
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id)
            .with("nim", self.nim.as_str())
            .with("name", self.name.as_str())
            .with("faculty", self.faculty.as_str())
            .with("program", self.program.as_str())
            .with("entry_year", self.entry_year)
            .with("status", self.status.as_str())
    }

    /// Reads a student back from a record. Every form field is required;
    /// a missing or unknown value yields `None`.
    pub fn from_record(record: &Record) -> Option<Self> {
        Some(Self {
            id: record.get("id").and_then(Value::as_i64).unwrap_or_default(),
            nim: record.text("nim")?,
            name: record.text("name")?,
            faculty: record.text("faculty")?,
            program: record.text("program")?,
            entry_year: record.get("entry_year").and_then(Value::as_i64)?,
            status: record.text("status")?.parse().ok()?,
        })
    }
}

impl From<&Student> for Record {
    fn from(student: &Student) -> Self {
        student.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_record() {
        let student = Student {
            id: 1,
            nim: "2021001".to_string(),
            name: "Rina Kartika".to_string(),
            faculty: "Teknik".to_string(),
            program: "Informatika".to_string(),
            entry_year: 2021,
            status: UserStatus::Active,
        };
        assert_eq!(Student::from_record(&student.to_record()), Some(student));
    }

    #[test]
    fn test_missing_required_field() {
        let record = Record::new()
            .with("nim", "2021001")
            .with("name", "Rina")
            .with("faculty", "Teknik")
            .with("program", "Informatika")
            .with("status", "active");
        assert!(Student::from_record(&record).is_none());
    }
}
