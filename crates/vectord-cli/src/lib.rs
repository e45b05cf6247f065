//! # vectord-cli
//!
//! Command-line front end for a local vectord data directory: record
//! CRUD, oracle listing and invocation.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::run_command;
