//! The quote store and its merge policy

use crate::domain::Quote;
use crate::error::{QuothError, Result};
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashSet};

/// Outcome of merging a remote snapshot into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of distinct remote texts that were not present locally.
    pub added: usize,
}

/// Owns the canonical quote list and defines how local and remote
/// data reconcile.
///
/// Merge policy (pinned): *replace-and-keep-unique-local*. The remote
/// snapshot is the defining set; the merged list is every remote quote
/// (first occurrence per text, remote order) followed by every local
/// quote whose text the remote does not carry (local order). On a text
/// collision the remote category wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl Default for QuoteStore {
    fn default() -> Self {
        QuoteStore {
            quotes: Quote::seed_list(),
        }
    }
}

impl QuoteStore {
    /// Create a store with no quotes at all.
    pub fn empty() -> Self {
        QuoteStore { quotes: Vec::new() }
    }

    /// Create a store from an existing list, kept verbatim.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        QuoteStore { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append a new quote after trimming both fields.
    ///
    /// Duplicates are allowed on manual add; only merge deduplicates.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(QuothError::Validation(
                "Quote text must not be empty".to_string(),
            ));
        }
        if category.is_empty() {
            return Err(QuothError::Validation(
                "Quote category must not be empty".to_string(),
            ));
        }

        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        Ok(quote)
    }

    /// Reconcile the store with a remote snapshot.
    ///
    /// Replaces the list with remote quotes plus local quotes unknown
    /// to the remote (see the type-level policy note). Returns how many
    /// net-new entries the remote contributed.
    pub fn merge(&mut self, remote: Vec<Quote>) -> MergeReport {
        let local_texts: HashSet<String> =
            self.quotes.iter().map(|q| q.text.clone()).collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut merged: Vec<Quote> = Vec::with_capacity(remote.len() + self.quotes.len());

        // Remote snapshot first; first occurrence per text wins.
        for quote in remote {
            if seen.insert(quote.text.clone()) {
                merged.push(quote);
            }
        }

        let added = merged
            .iter()
            .filter(|q| !local_texts.contains(&q.text))
            .count();

        // Keep local quotes the remote does not know about.
        for quote in self.quotes.drain(..) {
            if seen.insert(quote.text.clone()) {
                merged.push(quote);
            }
        }

        self.quotes = merged;
        MergeReport { added }
    }

    /// JSON-encode the current list: a compact array of
    /// `{text, category}` objects, no envelope.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.quotes)?)
    }

    /// Replace the list with the contents of a persisted blob.
    ///
    /// On unparseable input the store is left exactly as it was and a
    /// `CorruptData` error is returned.
    pub fn hydrate(&mut self, blob: &str) -> Result<()> {
        let parsed = parse_quote_blob(blob)?;
        self.quotes = parsed;
        Ok(())
    }

    /// Append external quotes verbatim, no dedup.
    pub fn import_bulk(&mut self, quotes: Vec<Quote>) {
        self.quotes.extend(quotes);
    }

    /// Pick a uniformly random quote, optionally within a category.
    pub fn random(&self, category: Option<&str>) -> Option<&Quote> {
        let mut rng = rand::thread_rng();
        match category {
            Some(cat) => {
                let candidates: Vec<&Quote> =
                    self.quotes.iter().filter(|q| q.category == cat).collect();
                candidates.choose(&mut rng).copied()
            }
            None => self.quotes.choose(&mut rng),
        }
    }

    /// Sorted unique category names.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.quotes.iter().map(|q| q.category.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Quotes matching a category, in list order.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }
}

/// Parse a JSON blob into a quote list, mapping parse failures to
/// `CorruptData`.
pub fn parse_quote_blob(blob: &str) -> Result<Vec<Quote>> {
    serde_json::from_str(blob)
        .map_err(|e| QuothError::CorruptData(format!("Failed to parse quote list: {}", e)))
}
