pub mod config;
pub mod error;
pub mod status;
pub mod target;
