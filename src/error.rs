//! Error types for quoth

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the quoth application
#[derive(Debug, Error)]
pub enum QuothError {
    #[error("Not a quoth vault: {0}")]
    NotQuothVault(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Corrupt quote data: {0}")]
    CorruptData(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuothError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuothError::NotQuothVault(_) => 2,
            QuothError::Validation(_) => 3,
            QuothError::CorruptData(_) => 4,
            QuothError::Network(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuothError::NotQuothVault(path) => {
                format!(
                    "Not a quoth vault: {}\n\n\
                    Suggestions:\n\
                    • Run 'quoth init' in this directory to create a new vault\n\
                    • Navigate to an existing quoth vault\n\
                    • Set QUOTH_ROOT environment variable to your vault path",
                    path.display()
                )
            }
            QuothError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Both the quote text and the category are required.\n\
                    Example: quoth add \"Stay hungry, stay foolish.\" inspiration",
                    msg
                )
            }
            QuothError::CorruptData(msg) => {
                format!(
                    "Corrupt quote data: {}\n\n\
                    Suggestions:\n\
                    • Quote files must be a JSON array of {{\"text\", \"category\"}} objects\n\
                    • Re-export a valid file with 'quoth export <FILE>'\n\
                    • If the vault itself is damaged, quoth falls back to the default quotes",
                    msg
                )
            }
            QuothError::Network(err) => {
                format!(
                    "Network error: {}\n\n\
                    Suggestions:\n\
                    • Check your connection and try again\n\
                    • Verify the endpoint: quoth config server_url\n\
                    • 'quoth sync --watch' keeps retrying on the next interval",
                    err
                )
            }
            QuothError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: quoth config sync_interval_secs 60",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuothError
pub type Result<T> = std::result::Result<T, QuothError>;
