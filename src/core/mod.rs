pub mod basis;
pub mod error;
