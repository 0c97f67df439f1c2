//! Configuration management

use crate::error::{QuothError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default mock collection endpoint (JSONPlaceholder).
pub const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default watch-mode sync interval in seconds.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 30;

/// Default number of posts fetched per sync.
pub const DEFAULT_FETCH_LIMIT: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    #[serde(default = "default_sync_interval_secs")]
    pub sync_interval_secs: u64,
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,
    pub created: DateTime<Utc>,
}

fn default_sync_interval_secs() -> u64 {
    DEFAULT_SYNC_INTERVAL_SECS
}

fn default_fetch_limit() -> u32 {
    DEFAULT_FETCH_LIMIT
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            created: Utc::now(),
        }
    }

    /// Load config from .quoth/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quoth").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuothError::NotQuothVault(path.to_path_buf())
            } else {
                QuothError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuothError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quoth/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quoth_dir = path.join(".quoth");
        let config_path = quoth_dir.join("config.toml");

        if !quoth_dir.exists() {
            fs::create_dir(&quoth_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuothError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
