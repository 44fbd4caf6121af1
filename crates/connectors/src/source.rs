use crate::{
    error::SourceError,
    file::{csv::CsvSource, json::JsonSource},
};
use async_trait::async_trait;
use model::records::record::Record;
use std::{fmt, path::Path, str::FromStr};

/// Materializes the records a grid works on.
///
/// Sources are the only place where fetching can fail; the grid processor
/// only ever sees the fully fetched list.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_all(&self) -> Result<Vec<Record>, SourceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| SourceError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl FromStr for DataFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            other => Err(SourceError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Csv => write!(f, "csv"),
            DataFormat::Json => write!(f, "json"),
        }
    }
}

/// Opens a file-backed source, picking the reader from the file extension.
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn RecordSource>, SourceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SourceError::NotFound(path.display().to_string()));
    }

    let source: Box<dyn RecordSource> = match DataFormat::from_path(path)? {
        DataFormat::Csv => Box::new(CsvSource::new(path)),
        DataFormat::Json => Box::new(JsonSource::new(path)),
    };
    Ok(source)
}
