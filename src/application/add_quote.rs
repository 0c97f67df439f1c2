//! Add quote use case

use crate::application::{load_store, save_store};
use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, RemoteSource};

/// Service for adding quotes to the vault
pub struct AddQuoteService {
    repository: FileSystemRepository,
}

impl AddQuoteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddQuoteService { repository }
    }

    /// Validate and append a quote, then persist the list.
    ///
    /// Validation failure leaves the vault untouched.
    pub fn execute(&self, text: &str, category: &str) -> Result<Quote> {
        let mut store = load_store(&self.repository)?;
        let quote = store.add(text, category)?;
        save_store(&self.repository, &store)?;
        Ok(quote)
    }

    /// Forward an already-persisted quote to the server, best effort.
    /// Returns whether the server accepted it; a failed push never
    /// rolls back the local add.
    pub async fn push(&self, remote: &dyn RemoteSource, quote: &Quote) -> bool {
        match remote.post_quote(quote).await {
            Ok(accepted) => {
                if !accepted {
                    tracing::warn!("server rejected pushed quote: {:?}", quote.text);
                }
                accepted
            }
            Err(e) => {
                tracing::warn!("failed to push quote to server: {}", e);
                false
            }
        }
    }
}
