//! Client configuration: base endpoint and optional request timeout.
//!
//! Resolution order, highest first:
//! 1. `--base-url` on the command line
//! 2. `NBA_API_BASE_URL` environment variable
//! 3. `~/.config/nba-client/config.json`
//! 4. [`DEFAULT_BASE_URL`]

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

use crate::{error::NbaError, Result, BASE_URL_ENV_VAR};

/// Local development server address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Path: ~/.config/nba-client/config.json
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("nba-client").join("config.json")
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Read a config file. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let config: Self = serde_json::from_str(&contents).map_err(|e| NbaError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        Ok(Some(config))
    }

    /// Resolve from the command line, environment, and default config file.
    pub fn resolve(cli_base_url: Option<String>) -> Result<Self> {
        Self::resolve_from(
            cli_base_url,
            std::env::var(BASE_URL_ENV_VAR).ok(),
            &config_path(),
        )
    }

    /// Resolve with explicit sources. Blank overrides are ignored.
    pub fn resolve_from(
        cli_base_url: Option<String>,
        env_base_url: Option<String>,
        path: &Path,
    ) -> Result<Self> {
        let mut config = Self::load(path)?.unwrap_or_default();

        let override_url = cli_base_url
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env_base_url.filter(|s| !s.trim().is_empty()));
        if let Some(url) = override_url {
            config.base_url = url.trim().to_string();
        }

        debug!(base_url = %config.base_url, timeout = ?config.timeout_secs, "resolved client config");
        Ok(config)
    }
}
