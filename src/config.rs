//! Client configuration
//!
//! File-backed client state: server base URL, the current auth token and HTTP
//! timeouts. The store is an explicit handle created once per process and
//! passed to whoever needs it; there is no global instance.

use crate::error::ClientError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Base URL used when no config file exists yet
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TICKETWATCH_CONFIG_DIR";

const CONFIG_DIR_NAME: &str = ".ticketwatch";
const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer token from the last login; empty means unauthenticated
    #[serde(default)]
    pub token: String,

    /// Server base URL, endpoint paths are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientConfig {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Check that `url` is an absolute http(s) URL and return it without a trailing slash.
pub fn validate_base_url(url: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(url)
        .map_err(|e| ClientError::Validation(format!("Invalid base URL '{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(url.trim_end_matches('/').to_string()),
        other => Err(ClientError::Validation(format!(
            "Invalid base URL '{}': unsupported scheme '{}'",
            url, other
        ))),
    }
}

/// Directory holding the config file.
///
/// `$TICKETWATCH_CONFIG_DIR` when set, otherwise `<home>/.ticketwatch`.
pub fn config_dir() -> Result<PathBuf, ClientError> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let base = directories::BaseDirs::new()
        .ok_or_else(|| ClientError::Config("Cannot determine home directory".to_string()))?;
    Ok(base.home_dir().join(CONFIG_DIR_NAME))
}

/// Full path of the default config file.
pub fn default_config_path() -> Result<PathBuf, ClientError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Handle to the on-disk client configuration
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: ClientConfig,
}

impl ConfigStore {
    /// Load the config at `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                ClientError::Config(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            serde_json::from_str(&content).map_err(|e| {
                ClientError::Config(format!(
                    "Malformed config file {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            debug!(config_path = %path.display(), "Config file not found, using defaults");
            ClientConfig::default()
        };
        Ok(Self { path, config })
    }

    /// Load from the default per-user location.
    pub fn load_default() -> Result<Self, ClientError> {
        Self::load(default_config_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &ClientConfig {
        &self.config
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = token.into();
    }

    pub fn clear_token(&mut self) {
        self.config.token.clear();
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<(), ClientError> {
        self.config.base_url = validate_base_url(url)?;
        Ok(())
    }

    /// Write the current configuration back to disk.
    ///
    /// Creates the parent directory if needed, writes a sibling temp file and
    /// renames it over the target.
    pub fn persist(&self) -> Result<(), ClientError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                ClientError::Config(format!(
                    "Failed to create config directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(&self.config)
            .map_err(|e| ClientError::Config(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content).map_err(|e| {
            ClientError::Config(format!(
                "Failed to write config to {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        restrict_permissions(&tmp_path);
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            ClientError::Config(format!(
                "Failed to replace config file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(config_path = %self.path.display(), "Config persisted");
        Ok(())
    }
}

// The file holds a bearer token.
#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)) {
        tracing::warn!("Failed to restrict permissions on {}: {}", path.display(), e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}
