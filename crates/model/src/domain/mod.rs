pub mod lecturer;
pub mod status;
pub mod student;
