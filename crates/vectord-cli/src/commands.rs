//! Command implementations.
//!
//! Each command loads the layered configuration, applies CLI
//! overrides, opens the host over the data directory and prints the
//! outcome. Envelopes are checked for `success` before any payload is
//! trusted; failures exit nonzero.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::cli::{Cli, Commands};
use vectord_engine::decode_payload;
use vectord_service::Host;
use vectord_types::{CallRequest, Record, Settings};

/// Execute a parsed CLI invocation.
pub async fn run_command(cli: Cli) -> Result<()> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("failed to load configuration")?;

    if let Some(data_dir) = &cli.data_dir {
        settings.data_dir = data_dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }

    init_logging(&settings)?;

    let host = Host::open(&settings).context("failed to open data directory")?;

    match cli.command {
        Commands::CreateRecord { data, meta } => {
            let record = Record::new(parse_data(&data)?).with_meta(parse_meta(&meta)?);
            let resp = host.records().create(record);
            if !resp.success {
                bail!("{}", resp.message);
            }
            println!("{}", resp.message);
        }
        Commands::ReadRecord { id } => {
            let resp = host.records().read(id);
            if !resp.success {
                bail!("{}", resp.message);
            }
            let record = resp.record.expect("success envelope carries the record");
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::UpdateRecord { id, data, meta } => {
            let data = data.as_deref().map(parse_data).transpose()?;
            let meta = if meta.is_empty() {
                None
            } else {
                Some(parse_meta(&meta)?)
            };
            let resp = host.records().update(id, data, meta);
            if !resp.success {
                bail!("{}", resp.message);
            }
        }
        Commands::DeleteRecord { id } => {
            let resp = host.records().delete(id);
            if !resp.success {
                bail!("{}", resp.message);
            }
        }
        Commands::ListRecords { page, per_page } => {
            let listed = host.records().list(page, per_page);
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        Commands::ListOracles => {
            let listed = host.oracles().list();
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        Commands::Call { oracle, id, args } => {
            let request = CallRequest::new(oracle, id).with_args(parse_args(&args));
            let resp = host.runner().run(&request).await;
            if !resp.success {
                bail!("{}", resp.message);
            }
            let payload = resp.data.expect("success envelope carries the payload");
            let value = decode_payload(&payload).context("failed to decode payload")?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Info => {
            println!("{}", serde_json::to_string_pretty(&host.info())?);
        }
    }

    Ok(())
}

fn init_logging(settings: &Settings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}

/// Parse "1,0,0.5" into vector components.
fn parse_data(data: &str) -> Result<Vec<f32>> {
    data.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f32>()
                .with_context(|| format!("invalid vector component: {}", s))
        })
        .collect()
}

/// Parse repeated "key=value" flags into a metadata map.
fn parse_meta(entries: &[String]) -> Result<HashMap<String, String>> {
    let mut meta = HashMap::new();
    for entry in entries {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("invalid metadata entry (expected key=value): {}", entry))?;
        meta.insert(key.to_string(), value.to_string());
    }
    Ok(meta)
}

/// Parse each argument as JSON, falling back to a bare string.
fn parse_args(args: &[String]) -> Vec<Value> {
    args.iter()
        .map(|arg| serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.clone())))
        .collect()
}
