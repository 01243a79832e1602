//! Configuration loading for the `a2card` binary.
//!
//! Reads `config.toml` from the data directory (`~/.a2card/` by default) and
//! deserializes it into [`A2CardConfig`]. The implicit file falls back to
//! defaults when missing or malformed; a file named explicitly on the
//! command line must exist and parse.

use std::path::{Path, PathBuf};

use a2card_types::config::A2CardConfig;
use a2card_types::error::ConfigError;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `A2CARD_DATA_DIR` environment variable
/// 2. `~/.a2card`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("A2CARD_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".a2card");
    }

    // Last resort: current directory
    PathBuf::from(".a2card")
}

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// A missing file means defaults. Any other failure is logged and also
/// falls back to defaults; only an explicit `--config` is fatal.
pub async fn load_config(data_dir: &Path) -> A2CardConfig {
    let path = data_dir.join(CONFIG_FILE_NAME);
    if let Ok(false) = tokio::fs::try_exists(&path).await {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return A2CardConfig::default();
    }
    load_config_file(&path).await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring config file, using defaults");
        A2CardConfig::default()
    })
}

/// Load configuration from an explicitly named file.
pub async fn load_config_file(path: &Path) -> Result<A2CardConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Pick the config source: an explicit path when given, else the data dir.
pub async fn resolve_config(explicit: Option<&Path>) -> Result<A2CardConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_file(path).await,
        None => Ok(load_config(&resolve_data_dir()).await),
    }
}
