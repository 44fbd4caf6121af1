use crate::core::value::Value;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Member name the grid widget reads the row identifier from.
pub const ROW_ID_FIELD: &str = "DT_RowId";

/// One formatted output row: column keys to display values, in column order,
/// followed by the row identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormattedRow {
    pub cells: Vec<(String, Value)>,
    pub row_id: String,
}

impl FormattedRow {
    pub fn new(row_id: String) -> Self {
        Self {
            cells: Vec::new(),
            row_id,
        }
    }

    /// Sets a cell. A key that is already present keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: &str, value: Value) {
        match self.cells.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl Serialize for FormattedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cells = self.cells.iter().filter(|(k, _)| k != ROW_ID_FIELD);
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in cells {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(ROW_ID_FIELD, &self.row_id)?;
        map.end()
    }
}

/// Response consumed by the grid widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub draw: i64,
    pub records_total: usize,
    pub records_filtered: usize,
    pub data: Vec<FormattedRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_shape() {
        let mut row = FormattedRow::new("42".to_string());
        row.insert("name", Value::String("Andi".to_string()));
        row.insert("rank", Value::Int(3));

        let envelope = ResultEnvelope {
            draw: 7,
            records_total: 3,
            records_filtered: 1,
            data: vec![row],
        };

        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"draw":7,"recordsTotal":3,"recordsFiltered":1,"data":[{"name":"Andi","rank":3,"DT_RowId":"42"}]}"#
        );
    }

    #[test]
    fn test_duplicate_keys_overwrite_in_place() {
        let mut row = FormattedRow::new(String::new());
        row.insert("a", Value::Int(1));
        row.insert("b", Value::Int(2));
        row.insert("a", Value::Int(3));
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_row_id_member_is_not_duplicated() {
        let mut row = FormattedRow::new("9".to_string());
        row.insert(ROW_ID_FIELD, Value::String("ignored".to_string()));
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"DT_RowId":"9"}"#);
    }
}
