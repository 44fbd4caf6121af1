pub mod core;
pub mod domain;
pub mod grid;
pub mod listing;
pub mod records;
