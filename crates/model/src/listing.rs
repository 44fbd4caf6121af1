use crate::{core::value::Value, records::record::Record};
use serde::Serialize;

/// Fields of a lecturer listing row, in output order.
pub const LECTURER_LISTING_FIELDS: [&str; 5] = ["nidn", "name", "expertise", "action", "is_active"];

/// Placeholder the listing page replaces with its own buttons.
pub const ACTION_PLACEHOLDER: &str = "empty";

/// Envelope of the "fetch everything" listing endpoints, used by pages that
/// load a whole table in one request instead of paging server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingResponse {
    pub code: u16,
    pub status: ListingStatus,
    pub message: String,
    pub data: Option<Vec<Record>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Success,
    Failed,
}

impl ListingResponse {
    pub const FOUND_MESSAGE: &'static str = "Data berhasil diterima";
    pub const NOT_FOUND_MESSAGE: &'static str = "Maaf data tidak ditemukan";

    /// `404`/`failed` with a null payload when `rows` is empty, `200`/`success` otherwise.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        if rows.is_empty() {
            Self {
                code: 404,
                status: ListingStatus::Failed,
                message: Self::NOT_FOUND_MESSAGE.to_string(),
                data: None,
            }
        } else {
            Self {
                code: 200,
                status: ListingStatus::Success,
                message: Self::FOUND_MESSAGE.to_string(),
                data: Some(rows),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ListingStatus::Success
    }
}

/// Projects lecturer records onto the listing row shape and wraps them.
pub fn lecturer_listing(records: &[Record]) -> ListingResponse {
    let rows = records
        .iter()
        .map(|record| {
            LECTURER_LISTING_FIELDS
                .iter()
                .map(|&field| match field {
                    "action" => (field, Value::from(ACTION_PLACEHOLDER)),
                    _ => (field, record.get(field).cloned().unwrap_or(Value::Null)),
                })
                .collect::<Record>()
        })
        .collect();
    ListingResponse::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing_is_not_found() {
        let response = ListingResponse::from_rows(Vec::new());
        assert_eq!(response.code, 404);
        assert!(!response.is_success());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "failed");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_listing_with_rows() {
        let response = ListingResponse::from_rows(vec![Record::new().with("name", "Andi")]);
        assert_eq!(response.code, 200);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"][0]["name"], "Andi");
    }

    #[test]
    fn test_lecturer_listing_projection() {
        let lecturer = Record::new()
            .with("id", 3)
            .with("nidn", Value::Null)
            .with("name", "Siti Rahma")
            .with("expertise", "Information Systems")
            .with("academic_rank", "Lektor")
            .with("is_active", true);

        let response = lecturer_listing(&[lecturer]);
        let rows = response.data.unwrap();
        assert_eq!(
            rows[0].field_names().collect::<Vec<_>>(),
            LECTURER_LISTING_FIELDS.to_vec()
        );
        assert_eq!(rows[0].get("action"), Some(&Value::String("empty".to_string())));
        assert_eq!(rows[0].get("nidn"), None);
        assert_eq!(rows[0].get("is_active"), Some(&Value::Boolean(true)));
    }

    #[test]
    fn test_lecturer_listing_empty() {
        assert_eq!(lecturer_listing(&[]).code, 404);
    }
}
