use crate::{error::SourceError, source::RecordSource};
use async_trait::async_trait;
use model::records::record::Record;

/// Serves a fixed, already materialized list of records.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    records: Vec<Record>,
}

impl MemorySource {
    pub fn new(name: &str, records: Vec<Record>) -> Self {
        Self {
            name: name.to_string(),
            records,
        }
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_all(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}
