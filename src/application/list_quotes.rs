//! List quotes use case

use crate::application::load_store;
use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for listing quotes and categories
pub struct ListQuotesService {
    repository: FileSystemRepository,
}

impl ListQuotesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListQuotesService { repository }
    }

    /// List quotes in insertion order, optionally filtered by category
    /// and truncated to a limit.
    pub fn execute(&self, category: Option<&str>, limit: Option<usize>) -> Result<Vec<Quote>> {
        let store = load_store(&self.repository)?;

        let mut quotes: Vec<Quote> = match category {
            Some(cat) => store
                .filter_by_category(cat)
                .into_iter()
                .cloned()
                .collect(),
            None => store.quotes().to_vec(),
        };

        if let Some(n) = limit {
            quotes.truncate(n);
        }

        Ok(quotes)
    }

    /// Sorted unique category names across the vault.
    pub fn categories(&self) -> Result<Vec<String>> {
        let store = load_store(&self.repository)?;
        Ok(store.categories())
    }
}
