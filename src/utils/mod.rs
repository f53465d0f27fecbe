pub mod config;
pub mod serialization;
