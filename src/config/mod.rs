mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the process configuration.
///
/// Reads `$CONFIG_PATH` (or `config.yaml` when present), then applies
/// environment overrides. With neither a file nor `CONFIG_PATH`, defaults apply.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? => {
            load_from(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(config, |key| env::var(key).ok())
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays `GEMINI_API_KEY` and `PORT` onto a loaded configuration.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("GEMINI_API_KEY").filter(|key| !key.is_empty()) {
        config.llm.api_key = Some(api_key);
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}
