pub mod error;
pub mod file;
pub mod memory;
pub mod seed;
pub mod source;

pub use error::SourceError;
pub use source::{DataFormat, RecordSource, open_file};
