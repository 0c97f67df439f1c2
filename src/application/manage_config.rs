//! Config management use case

use crate::error::{QuothError, Result};
use crate::infrastructure::{Config, FileSystemRepository, VaultRepository};

/// Service for managing vault configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "server_url" => Ok(config.server_url.clone()),
            "sync_interval_secs" => Ok(config.sync_interval_secs.to_string()),
            "fetch_limit" => Ok(config.fetch_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuothError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: server_url, sync_interval_secs, fetch_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "server_url" => {
                if value.trim().is_empty() {
                    return Err(QuothError::Config(
                        "server_url must not be empty".to_string(),
                    ));
                }
                config.server_url = value.to_string();
            }
            "sync_interval_secs" => {
                let secs: u64 = value.parse().map_err(|_| {
                    QuothError::Config(format!(
                        "Invalid sync_interval_secs: '{}' (expected a positive integer)",
                        value
                    ))
                })?;
                if secs == 0 {
                    return Err(QuothError::Config(
                        "sync_interval_secs must be at least 1".to_string(),
                    ));
                }
                config.sync_interval_secs = secs;
            }
            "fetch_limit" => {
                let limit: u32 = value.parse().map_err(|_| {
                    QuothError::Config(format!(
                        "Invalid fetch_limit: '{}' (expected a positive integer)",
                        value
                    ))
                })?;
                if limit == 0 {
                    return Err(QuothError::Config(
                        "fetch_limit must be at least 1".to_string(),
                    ));
                }
                config.fetch_limit = limit;
            }
            "created" => {
                return Err(QuothError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuothError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: server_url, sync_interval_secs, fetch_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
