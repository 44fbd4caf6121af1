use connectors::SourceError;
use engine_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load records: {0}")]
    Source(#[from] SourceError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// A table loaded from a file has no seed rows to fall back on.
    #[error("Table '{0}' has no built-in records, pass --source")]
    MissingSource(String),
}
