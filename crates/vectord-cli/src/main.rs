//! vectord
//!
//! A local vector record store with named scoring oracles.
//!
//! # Usage
//!
//! ```bash
//! vectord create-record --data 1,0,1 --meta label=sample
//! vectord call find_similar 1 0.5
//! vectord list-records --page 1 --per-page 20
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/vectord/config.toml)
//! 3. Environment variables (VECTORD_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use vectord_cli::{run_command, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run_command(cli).await
}
