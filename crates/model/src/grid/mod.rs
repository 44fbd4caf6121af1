pub mod column;
pub mod envelope;
pub mod request;
