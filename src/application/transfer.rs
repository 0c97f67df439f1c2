//! JSON file export/import use case

use crate::application::{load_store, save_store};
use crate::domain::store::parse_quote_blob;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::fs;
use std::path::Path;

/// Service for moving quotes in and out of the vault as JSON files
pub struct TransferService {
    repository: FileSystemRepository,
}

impl TransferService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TransferService { repository }
    }

    /// Write the vault's quotes to a pretty-printed JSON file.
    /// Returns the number of exported quotes.
    pub fn export(&self, file: &Path) -> Result<usize> {
        let store = load_store(&self.repository)?;

        let json = serde_json::to_string_pretty(store.quotes())?;
        fs::write(file, json)?;

        Ok(store.len())
    }

    /// Append every quote from a JSON file verbatim, then persist.
    /// An unparseable file fails with `CorruptData` and leaves the
    /// vault untouched. Returns the number of imported quotes.
    pub fn import(&self, file: &Path) -> Result<usize> {
        let contents = fs::read_to_string(file)?;
        let imported = parse_quote_blob(&contents)?;
        let count = imported.len();

        let mut store = load_store(&self.repository)?;
        store.import_bulk(imported);
        save_store(&self.repository, &store)?;

        Ok(count)
    }
}
