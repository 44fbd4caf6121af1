pub mod builtin;
pub mod error;
pub mod settings;
pub mod table;

pub use error::ConfigError;
pub use settings::Settings;
pub use table::{ColumnConfig, RenderSpec, TableConfig};
