//! Initialize vault use case

use crate::application::save_store;
use crate::domain::QuoteStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, VaultRepository};
use std::fs;
use std::path::Path;

/// Initialize a new quote vault at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    // Seed the vault so a fresh install has something to show.
    save_store(&repo, &QuoteStore::default())?;

    println!("Initialized quoth vault at {}", path.display());
    println!("Server: {}", config.server_url);

    Ok(())
}
