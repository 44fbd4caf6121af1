use thiserror::Error;

/// Errors raised while loading table configurations or runtime settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse table configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A column refers to a renderer name the registry does not know.
    #[error("Unknown renderer '{renderer}' for column '{column}'")]
    UnknownRenderer { column: String, renderer: String },

    /// No built-in table carries this name.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Invalid env file: {0}")]
    EnvFile(String),
}
