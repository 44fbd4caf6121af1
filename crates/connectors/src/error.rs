use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested data format has no source implementation.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed but does not hold a list of flat records.
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}
