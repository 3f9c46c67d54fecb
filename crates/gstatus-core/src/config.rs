//! Configuration management for gstatus.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Commits shown per history page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// gstatus configuration, optionally loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file can't be read or parsed, or holds
    /// an invalid value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde can't express.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first bad key.
    pub fn validate(&self) -> Result<()> {
        if self.general.page_size == 0 {
            return Err(Error::InvalidConfig {
                key: "general.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.git_program.trim().is_empty() {
            return Err(Error::InvalidConfig {
                key: "general.git_program".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Commits per history page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// git executable used for every query.
    #[serde(default = "default_git_program")]
    pub git_program: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            git_program: default_git_program(),
        }
    }
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_git_program() -> String {
    "git".into()
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Directory served under `/static/`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}
