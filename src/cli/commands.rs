//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quoth")]
#[command(about = "Terminal quote vault with server sync", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote vault
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a quote to the vault
    Add {
        /// The quote text
        text: String,

        /// The quote category
        category: String,

        /// Also send the quote to the server (best effort)
        #[arg(long)]
        push: bool,
    },

    /// Show a random quote (same as running quoth with no command)
    Show {
        /// Restrict the pick to a category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List quotes
    List {
        /// Only quotes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Show at most this many quotes
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List all categories in the vault
    Categories,

    /// Sync the vault against the server
    Sync {
        /// Keep syncing on the configured interval until Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },

    /// Export all quotes to a JSON file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Import quotes from a JSON file (appended verbatim)
    Import {
        /// Source file
        file: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
