//! CLI argument parsing.
//!
//! CLI flags override config-file and environment settings.

use clap::{Parser, Subcommand};

/// vectord
///
/// A local vector record store with named scoring oracles.
#[derive(Parser, Debug)]
#[command(name = "vectord")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/vectord/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the data directory
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// vectord commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a new record
    CreateRecord {
        /// Vector components, comma separated (e.g. "1,0,0.5")
        #[arg(long)]
        data: String,

        /// Metadata entries as key=value, repeatable
        #[arg(short, long)]
        meta: Vec<String>,
    },

    /// Read a record by identifier
    ReadRecord {
        /// Record identifier
        id: u64,
    },

    /// Update a record; omitted fields keep their stored value
    UpdateRecord {
        /// Record identifier
        id: u64,

        /// Replacement vector components, comma separated
        #[arg(long)]
        data: Option<String>,

        /// Replacement metadata entries as key=value, repeatable
        #[arg(short, long)]
        meta: Vec<String>,
    },

    /// Delete a record by identifier
    DeleteRecord {
        /// Record identifier
        id: u64,
    },

    /// List stored records
    ListRecords {
        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: u64,

        /// Records per page
        #[arg(long, default_value = "20")]
        per_page: u64,
    },

    /// List registered oracles
    ListOracles,

    /// Call an oracle against a reference record
    Call {
        /// Oracle name
        oracle: String,

        /// Reference record identifier
        id: u64,

        /// Positional oracle arguments, JSON-encoded (bare words are
        /// treated as strings)
        args: Vec<String>,
    },

    /// Show host status
    Info,
}
