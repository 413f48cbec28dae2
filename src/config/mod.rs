mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads the configuration from `CONFIG_PATH` (when set) and the process
/// environment. Environment values win over the file.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").ok();
    load_with(config_path.as_deref(), |key| env::var(key).ok()).await
}

pub async fn load_with<F>(config_path: Option<&str>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from: {}", path);
            let config_str = tokio::fs::read_to_string(path).await?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, lookup)?;

    Ok(config)
}

fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(sink) = lookup("K_SINK") {
        config.sink = Some(sink);
    }
    if let Some(bucket) = lookup("BUCKET") {
        config.bucket = Some(bucket);
    }
    if let Some(language) = lookup("LANGUAGE") {
        config.language = language;
    }
    if let Some(namespace) = lookup("NAMESPACE") {
        config.namespace = namespace;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
    }
    if let Some(level) = lookup("LOG_LEVEL") {
        config.server.logs.level = level;
    }
    Ok(())
}
