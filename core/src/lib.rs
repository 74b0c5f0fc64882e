pub mod error;
pub mod probe;
pub mod scanner;
