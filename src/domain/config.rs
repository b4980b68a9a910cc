//! Configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Contents of the optional `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Actions API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Actions API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// REST API root, e.g. `https://api.github.com/`.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api_url must be an absolute http(s) URL, got '{}'",
                self.api_url
            )));
        }
        Ok(())
    }

    /// Root URL with a trailing slash so relative endpoint paths join beneath it.
    pub fn base_url(&self) -> Url {
        let mut url = self.api_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com/").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}
