//! Configuration loading from `config.toml` and the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppError, Config};

pub const CONFIG_PATH_ENV: &str = "RUN_DELETE_CONFIG";
pub const API_URL_ENV: &str = "GH_API_URL";
const TOKEN_ENVS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Default location: `$HOME/.config/run-delete/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(".config/run-delete/config.toml"))
}

/// Load configuration, applying environment overrides.
///
/// A missing file yields defaults; an explicitly named file must exist.
pub fn load_config() -> Result<Config, AppError> {
    let mut config = match env::var_os(CONFIG_PATH_ENV) {
        Some(path) => read_config(Path::new(&path))?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path)?,
            _ => Config::default(),
        },
    };

    if let Ok(raw) = env::var(API_URL_ENV) {
        config.api.api_url = Url::parse(raw.trim()).map_err(|e| {
            AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, raw, e))
        })?;
    }

    config.validate()?;
    Ok(config)
}

pub fn read_config(path: &Path) -> Result<Config, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Token from `GH_TOKEN`, falling back to `GITHUB_TOKEN`.
pub fn token_from_env() -> Option<String> {
    TOKEN_ENVS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
