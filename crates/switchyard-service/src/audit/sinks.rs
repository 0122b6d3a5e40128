//! Audit sink trait and built-in sinks

use super::types::AuditEvent;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};

/// Destination for audit events
#[async_trait::async_trait]
pub trait AuditSink: Send + Sync {
    /// Record one event
    async fn record(&self, event: &AuditEvent) -> Result<()>;

    /// Get the sink name (for logging)
    fn name(&self) -> &str;
}

/// Writes each event as a structured log line under the `switchyard::audit` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

#[async_trait::async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: &AuditEvent) -> Result<()> {
        info!(
            target: "switchyard::audit",
            action = %event.action,
            rule_id = %event.rule_id,
            rule_name = event.rule_name.as_deref(),
            changes = ?event.changes,
            severity = ?event.severity,
            "rule audit event"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

/// Broadcast-based audit sink.
///
/// Uses `tokio::broadcast` so multiple subscribers can receive the same events.
/// Slow subscribers will miss events (lagged) rather than blocking the admin.
#[derive(Debug, Clone)]
pub struct BroadcastAuditSink {
    sender: broadcast::Sender<AuditEvent>,
}

impl BroadcastAuditSink {
    /// Create a new sink with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to events. Returns a receiver that will get all future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuditEvent> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastAuditSink {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait::async_trait]
impl AuditSink for BroadcastAuditSink {
    async fn record(&self, event: &AuditEvent) -> Result<()> {
        // send() returns Err if there are no receivers, which is fine
        let _ = self.sender.send(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "broadcast"
    }
}

/// Appends each event as one JSON line to a file.
///
/// Writes are serialized through a mutex so lines never interleave.
#[derive(Debug)]
pub struct FileAuditSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Open (or create) the log file, creating parent directories as needed
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Audit(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| Error::Audit(format!("failed to open {}: {e}", path.display())))?;

        debug!("Audit log opened at {}", path.display());
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Get the log file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl AuditSink for FileAuditSink {
    async fn record(&self, event: &AuditEvent) -> Result<()> {
        let mut line = serde_json::to_vec(event).map_err(|e| Error::Audit(e.to_string()))?;
        line.push(b'\n');

        let mut file = self.file.lock().await;
        file.write_all(&line)
            .await
            .map_err(|e| Error::Audit(format!("failed to write {}: {e}", self.path.display())))?;
        file.flush()
            .await
            .map_err(|e| Error::Audit(format!("failed to flush {}: {e}", self.path.display())))
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

#[async_trait::async_trait]
impl AuditSink for NoopAuditSink {
    async fn record(&self, _event: &AuditEvent) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
