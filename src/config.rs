//! Runtime configuration.
//!
//! The only recognised option is `apiBase`, the backend REST root. Sources, lowest to highest
//! precedence: built-in default, TOML file, `ZAPFLOW_API_BASE`, `--api-base`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const ENV_API_BASE: &str = "ZAPFLOW_API_BASE";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid apiBase '{value}': {reason}")]
    InvalidApiBase { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(rename = "apiBase", default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl AppConfig {
    /// `~/.config/zapflow/config.toml` (platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zapflow").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the configuration from every source.
    ///
    /// An explicit `path` must exist; the default path is only read when present.
    pub fn resolve(
        path: Option<&Path>,
        env_api_base: Option<String>,
        cli_api_base: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        if let Some(api_base) = env_api_base.filter(|v| !v.trim().is_empty()) {
            config.api_base = api_base;
        }
        if let Some(api_base) = cli_api_base {
            config.api_base = api_base;
        }

        config.normalized()
    }

    /// Same as `resolve`, reading the override from the process environment.
    pub fn load(path: Option<&Path>, cli_api_base: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(path, std::env::var(ENV_API_BASE).ok(), cli_api_base)
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.api_base.trim().trim_end_matches('/').to_string();
        let url = Url::parse(&trimmed).map_err(|e| ConfigError::InvalidApiBase {
            value: self.api_base.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiBase {
                value: self.api_base.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        self.api_base = trimmed;
        Ok(self)
    }
}
