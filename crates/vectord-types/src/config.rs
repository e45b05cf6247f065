//! Configuration loading for vectord.
//!
//! Layered precedence: built-in defaults, then the config file
//! (~/.config/vectord/config.toml), then an optional CLI-specified
//! file, then VECTORD_* environment variables. CLI flags are applied
//! by the caller after this returns.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration could not be loaded or is invalid.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(pub String);

/// Oracle invocation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationSettings {
    /// Wall-clock budget per invocation (ms). Invocations that exceed
    /// it are abandoned and reported as timed out.
    #[serde(default = "default_budget_ms")]
    pub budget_ms: u64,
}

fn default_budget_ms() -> u64 {
    1000
}

impl Default for InvocationSettings {
    fn default() -> Self {
        Self {
            budget_ms: default_budget_ms(),
        }
    }
}

/// Result payload compression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionSettings {
    /// JSON documents strictly larger than this many bytes are
    /// gzip-compressed before being placed in the response payload.
    #[serde(default = "default_min_bytes")]
    pub min_bytes: usize,
}

fn default_min_bytes() -> usize {
    2048
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            min_bytes: default_min_bytes(),
        }
    }
}

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the record data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Invocation limits.
    #[serde(default)]
    pub invocation: InvocationSettings,

    /// Payload compression thresholds.
    #[serde(default)]
    pub compression: CompressionSettings,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    ProjectDirs::from("", "", "vectord")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            invocation: InvocationSettings::default(),
            compression: CompressionSettings::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from("", "", "vectord")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("data_dir", default_data_dir())
            .map_err(|e| ConfigError(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| ConfigError(e.to_string()))?
            .set_default("invocation.budget_ms", default_budget_ms() as i64)
            .map_err(|e| ConfigError(e.to_string()))?
            .set_default("compression.min_bytes", default_min_bytes() as i64)
            .map_err(|e| ConfigError(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // VECTORD_DATA_DIR, VECTORD_LOG_LEVEL, VECTORD_INVOCATION_BUDGET_MS, ...
        builder = builder.add_source(
            Environment::with_prefix("VECTORD")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| ConfigError(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.invocation.budget_ms == 0 {
            return Err(ConfigError("invocation.budget_ms must be > 0".to_string()));
        }
        Ok(())
    }

    /// Data directory as a path.
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
