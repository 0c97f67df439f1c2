//! Application layer - Use cases and orchestration

pub mod add_quote;
pub mod init;
pub mod list_quotes;
pub mod manage_config;
pub mod show_quote;
pub mod sync;
pub mod transfer;

pub use add_quote::AddQuoteService;
pub use list_quotes::ListQuotesService;
pub use manage_config::ConfigService;
pub use show_quote::ShowQuoteService;
pub use sync::{SyncReport, SyncService};
pub use transfer::TransferService;

use crate::domain::QuoteStore;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, VaultRepository, QUOTES_KEY};

/// Load the quote store from the vault.
///
/// A missing blob yields the default seed list; a corrupt blob is
/// logged and also falls back to the defaults, never fatal.
pub fn load_store(repository: &FileSystemRepository) -> Result<QuoteStore> {
    let mut store = QuoteStore::default();

    if let Some(blob) = repository.get(QUOTES_KEY)? {
        if let Err(e) = store.hydrate(&blob) {
            tracing::warn!("stored quotes unreadable, falling back to defaults: {}", e);
        }
    }

    Ok(store)
}

/// Persist the quote store into the vault.
pub fn save_store(repository: &FileSystemRepository, store: &QuoteStore) -> Result<()> {
    repository.set(QUOTES_KEY, &store.serialize()?)
}
