pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod server;
pub mod telemetry;

pub use error::{Error, Result};
