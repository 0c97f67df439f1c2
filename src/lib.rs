//! quoth - Terminal quote vault with server sync
//!
//! A command-line application that keeps a local collection of quotes,
//! persists it as JSON inside a `.quoth` vault directory, and syncs it
//! against a remote JSON collection endpoint with remote-precedence
//! conflict resolution.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuothError;
