//! Configuration management for jobboard

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Base URL used when neither the flag, the environment nor the config file set one
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Directory under the home directory holding config and session files
const APP_DIR: &str = ".jobboard";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Job Board API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Client-side request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resolve a file under `~/.jobboard/`
pub fn app_file(name: &str) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::Invalid(
        "Could not determine home directory".to_string(),
    ))?;

    Ok(home.join(APP_DIR).join(name))
}

/// Write a file readable only by the current user, creating parent directories.
pub fn write_private(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        app_file("config.yaml")
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("configuration {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;
        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(&path, &contents)
    }

    /// Base URL with precedence: explicit override > config file > default.
    ///
    /// Trailing slashes are dropped so paths can be appended verbatim.
    pub fn api_url(&self, override_url: Option<&str>) -> String {
        override_url
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
