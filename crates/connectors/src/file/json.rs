use crate::{error::SourceError, source::RecordSource};
use async_trait::async_trait;
use model::records::record::Record;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads records from a JSON file holding either an array of flat objects
/// or a listing envelope with the array under `data`. Nested values are kept
/// as their JSON text.
#[derive(Debug, Clone)]
pub struct JsonSource {
    name: String,
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRows {
    Rows(Vec<Record>),
    Envelope { data: Vec<Record> },
}

impl JsonSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { name, path }
    }
}

#[async_trait]
impl RecordSource for JsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_all(&self) -> Result<Vec<Record>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let records = parse_json(&text)?;
        debug!(source = %self.name, rows = records.len(), "Loaded JSON records");
        Ok(records)
    }
}

pub fn parse_json(text: &str) -> Result<Vec<Record>, SourceError> {
    match serde_json::from_str::<JsonRows>(text) {
        Ok(JsonRows::Rows(rows)) | Ok(JsonRows::Envelope { data: rows }) => Ok(rows),
        Err(e) => Err(SourceError::InvalidFormat(format!(
            "Expected an array of objects or an object with a `data` array: {e}"
        ))),
    }
}
