//! Server sync use case
//!
//! One-shot sync fetches the remote snapshot, merges it with remote
//! precedence, and persists the result. Watch mode repeats that on a
//! fixed interval until Ctrl-C. An atomic in-progress flag skips a
//! cycle whose predecessor is still running.

use crate::application::{load_store, save_store};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, RemoteSource, VaultRepository};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Outcome of one successful sync cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Net-new quotes contributed by the server.
    pub added: usize,
    /// Vault size after the merge.
    pub total: usize,
}

/// Service for syncing the vault against a remote source
pub struct SyncService<R> {
    repository: FileSystemRepository,
    remote: R,
    in_flight: AtomicBool,
}

impl<R: RemoteSource + Send + Sync> SyncService<R> {
    pub fn new(repository: FileSystemRepository, remote: R) -> Self {
        SyncService {
            repository,
            remote,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one sync cycle. Returns `Ok(None)` when another cycle is
    /// still in flight; that cycle is skipped, not queued.
    pub async fn sync_once(&self) -> Result<Option<SyncReport>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::warn!("sync already in progress, skipping this cycle");
            return Ok(None);
        }

        let result = self.run_cycle().await;
        self.in_flight.store(false, Ordering::SeqCst);
        result.map(Some)
    }

    async fn run_cycle(&self) -> Result<SyncReport> {
        tracing::debug!("fetching remote quotes");
        let remote_quotes = self.remote.fetch_quotes().await?;

        let mut store = load_store(&self.repository)?;
        let report = store.merge(remote_quotes);
        save_store(&self.repository, &store)?;

        tracing::info!(added = report.added, total = store.len(), "sync complete");
        Ok(SyncReport {
            added: report.added,
            total: store.len(),
        })
    }

    /// Sync now, then keep syncing on the configured interval until
    /// Ctrl-C. A failed cycle prints a status line and leaves local
    /// state untouched; the next tick retries.
    pub async fn watch(&self) -> Result<()> {
        let config = self.repository.load_config()?;
        let period = Duration::from_secs(config.sync_interval_secs.max(1));

        report_cycle(self.sync_once().await);

        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // skip immediate tick

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("Stopping sync");
                    break;
                }
                _ = ticker.tick() => {
                    report_cycle(self.sync_once().await);
                }
            }
        }

        Ok(())
    }
}

fn report_cycle(outcome: Result<Option<SyncReport>>) {
    match outcome {
        Ok(Some(report)) => {
            println!(
                "Sync complete: {} new, {} total",
                report.added, report.total
            );
        }
        Ok(None) => {
            println!("Sync skipped: previous cycle still running");
        }
        Err(e) => {
            println!("Sync failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{load_store, save_store};
    use crate::domain::{Quote, QuoteStore};
    use crate::error::QuothError;
    use crate::infrastructure::QUOTES_KEY;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tempfile::TempDir;

    struct FixedRemote {
        quotes: Vec<Quote>,
        delay: Duration,
    }

    #[async_trait]
    impl RemoteSource for FixedRemote {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.quotes.clone())
        }

        async fn post_quote(&self, _quote: &Quote) -> Result<bool> {
            Ok(true)
        }
    }

    struct FailingRemote;

    #[async_trait]
    impl RemoteSource for FailingRemote {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
            Err(QuothError::Config("server unreachable".to_string()))
        }

        async fn post_quote(&self, _quote: &Quote) -> Result<bool> {
            Ok(false)
        }
    }

    fn vault_with(quotes: Vec<Quote>) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        save_store(&repo, &QuoteStore::from_quotes(quotes)).unwrap();
        (temp, repo)
    }

    #[tokio::test]
    async fn test_sync_once_merges_and_persists() {
        let (_temp, repo) = vault_with(vec![Quote::new("A", "X")]);

        let remote = FixedRemote {
            quotes: vec![Quote::new("A", "Y"), Quote::new("B", "Z")],
            delay: Duration::ZERO,
        };
        let service = SyncService::new(repo.clone(), remote);

        let report = service.sync_once().await.unwrap().unwrap();
        assert_eq!(report, SyncReport { added: 1, total: 2 });

        let store = load_store(&repo).unwrap();
        assert_eq!(store.quotes()[0], Quote::new("A", "Y"));
        assert_eq!(store.quotes()[1], Quote::new("B", "Z"));
    }

    #[tokio::test]
    async fn test_sync_failure_leaves_local_state_untouched() {
        let (_temp, repo) = vault_with(vec![Quote::new("A", "X")]);
        let blob_before = repo.get(QUOTES_KEY).unwrap();

        let service = SyncService::new(repo.clone(), FailingRemote);
        let result = service.sync_once().await;

        assert!(result.is_err());
        assert_eq!(repo.get(QUOTES_KEY).unwrap(), blob_before);
    }

    #[tokio::test]
    async fn test_sync_recovers_after_failed_cycle() {
        let (_temp, repo) = vault_with(Vec::new());

        let failing = SyncService::new(repo.clone(), FailingRemote);
        assert!(failing.sync_once().await.is_err());

        // The guard is released on error; a later cycle proceeds.
        assert!(failing.sync_once().await.is_err());

        let working = SyncService::new(
            repo.clone(),
            FixedRemote {
                quotes: vec![Quote::new("B", "Z")],
                delay: Duration::ZERO,
            },
        );
        let report = working.sync_once().await.unwrap().unwrap();
        assert_eq!(report.added, 1);
    }

    #[tokio::test]
    async fn test_overlapping_sync_is_skipped() {
        let (_temp, repo) = vault_with(Vec::new());

        let service = Arc::new(SyncService::new(
            repo,
            FixedRemote {
                quotes: vec![Quote::new("slow", "s")],
                delay: Duration::from_millis(300),
            },
        ));

        let background = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.sync_once().await })
        };

        // Let the background cycle grab the guard before we contend.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let contended = service.sync_once().await.unwrap();
        assert!(contended.is_none());

        let first = background.await.unwrap().unwrap();
        assert!(first.is_some());
    }

    #[tokio::test]
    async fn test_sync_twice_is_idempotent() {
        let (_temp, repo) = vault_with(vec![Quote::new("local", "L")]);

        let remote = FixedRemote {
            quotes: vec![Quote::new("remote", "R")],
            delay: Duration::ZERO,
        };
        let service = SyncService::new(repo.clone(), remote);

        let first = service.sync_once().await.unwrap().unwrap();
        assert_eq!(first, SyncReport { added: 1, total: 2 });

        let second = service.sync_once().await.unwrap().unwrap();
        assert_eq!(second, SyncReport { added: 0, total: 2 });
    }
}
