//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_model() -> String {
    switchyard_core::DEFAULT_MODEL.to_string()
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Selection used when no rule matches
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
        }
    }
}

/// Rule store backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
}

/// Rule store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// SQLite database path
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Configured database path, or the default under the data directory
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(switchyard_store::default_db_path)
    }
}

/// Audit sink selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSinkKind {
    #[default]
    Tracing,
    Broadcast,
    File,
    None,
}

fn default_capacity() -> usize {
    256
}

/// Audit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Broadcast channel capacity
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// JSON-lines file for the `file` sink
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Configured audit log path, or `audit.jsonl` under the data directory
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| switchyard_store::default_data_dir().join("audit.jsonl"))
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            sink: AuditSinkKind::default(),
            capacity: default_capacity(),
            path: None,
        }
    }
}

fn default_filter() -> String {
    "switchyard=info".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            filter: default_filter(),
        }
    }
}
