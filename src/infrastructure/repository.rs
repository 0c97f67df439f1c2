//! File system repository
//!
//! A vault is a directory containing a `.quoth` subdirectory. Persisted
//! state lives there as keyed JSON blobs; the quote list itself is the
//! blob under [`QUOTES_KEY`].

use crate::error::{QuothError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence key for the quote list blob.
pub const QUOTES_KEY: &str = "quotes";

/// Abstract repository for vault operations
pub trait VaultRepository {
    /// Get the root directory of this vault
    fn root(&self) -> &Path;

    /// Load configuration from .quoth/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quoth/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quoth directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quoth directory structure
    fn initialize(&self) -> Result<()>;

    /// Read a persisted blob, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a persisted blob
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File system implementation of VaultRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the vault root by walking up from the current directory.
    /// First checks the QUOTH_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUOTH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_quoth_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuothError::Config(format!(
                    "QUOTH_ROOT is set to '{}' but no .quoth directory found. \
                    Run 'quoth init' in that directory or unset QUOTH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the vault root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quoth_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(QuothError::NotQuothVault(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .quoth directory
    fn has_quoth_dir(path: &Path) -> bool {
        path.join(".quoth").is_dir()
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(".quoth").join(format!("{}.json", key))
    }
}

impl VaultRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_quoth_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let quoth_dir = self.root.join(".quoth");

        if quoth_dir.exists() {
            return Err(QuothError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&quoth_dir)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(QuothError::Io)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, value).map_err(QuothError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_creates_quoth_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        assert!(temp.path().join(".quoth").exists());
        assert!(temp.path().join(".quoth").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".quoth")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_quoth() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            QuothError::NotQuothVault(_) => {}
            _ => panic!("Expected NotQuothVault error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.server_url, config.server_url);
    }

    #[test]
    fn test_get_missing_blob_is_none() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        assert_eq!(repo.get(QUOTES_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        repo.set(QUOTES_KEY, r#"[{"text":"A","category":"X"}]"#)
            .unwrap();

        let blob = repo.get(QUOTES_KEY).unwrap().unwrap();
        assert_eq!(blob, r#"[{"text":"A","category":"X"}]"#);
        assert!(temp.path().join(".quoth/quotes.json").exists());
    }

    #[test]
    fn test_set_overwrites_existing_blob() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        repo.set(QUOTES_KEY, "[]").unwrap();
        repo.set(QUOTES_KEY, r#"[{"text":"B","category":"Y"}]"#)
            .unwrap();

        let blob = repo.get(QUOTES_KEY).unwrap().unwrap();
        assert!(blob.contains("\"B\""));
    }

    #[test]
    fn test_discover_with_quoth_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("QUOTH_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".quoth")).unwrap();

        std::env::set_var("QUOTH_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_quoth_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("QUOTH_ROOT");

        let temp = TempDir::new().unwrap();
        // No .quoth directory

        std::env::set_var("QUOTH_ROOT", temp.path());

        let result = FileSystemRepository::discover();
        assert!(result.is_err());

        match result.unwrap_err() {
            QuothError::Config(msg) => {
                assert!(msg.contains("no .quoth directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_discover_without_quoth_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("QUOTH_ROOT");

        std::env::remove_var("QUOTH_ROOT");

        // Either discovers a vault above the test cwd or fails cleanly.
        match FileSystemRepository::discover() {
            Ok(_) => {}
            Err(QuothError::NotQuothVault(_)) => {}
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }
}
