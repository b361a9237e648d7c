//! Log filter selection and subscriber setup.

use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG` when set, else from `server.logs.level`.
///
/// Both accept full `EnvFilter` directives such as `soap_note_api=debug,tower_http=info`.
pub fn env_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    let directives = rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(configured_level);

    EnvFilter::try_new(directives)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", directives, e)))
}

/// Installs the global JSON subscriber.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();
}
