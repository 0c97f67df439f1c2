//! Random quote use case

use crate::application::load_store;
use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for picking a random quote.
pub struct ShowQuoteService {
    repository: FileSystemRepository,
}

impl ShowQuoteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ShowQuoteService { repository }
    }

    /// Pick a random quote, optionally restricted to a category.
    /// Returns `None` when nothing matches.
    pub fn execute(&self, category: Option<&str>) -> Result<Option<Quote>> {
        let store = load_store(&self.repository)?;
        Ok(store.random(category).cloned())
    }
}
