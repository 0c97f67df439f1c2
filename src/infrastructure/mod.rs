//! Infrastructure layer - External I/O, persistence, and the remote endpoint

pub mod config;
pub mod remote;
pub mod repository;

pub use config::Config;
pub use remote::{HttpRemoteSource, RemoteSource};
pub use repository::{FileSystemRepository, VaultRepository, QUOTES_KEY};
