//! Append-only metrics log.
//!
//! Newline-delimited JSON, one record per line, UTF-8. Blank lines are
//! ignored on read. A line that fails to parse aborts the whole read with
//! [`StorageError::Corrupt`]; there is no partial-recovery mode, so a
//! damaged log surfaces immediately instead of silently skewing stats.

use std::path::PathBuf;

use evaldash_core::MetricRecord;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::{Config, Result, StorageError};

/// Handle on the append-only log file.
pub struct MetricLog {
    path: PathBuf,
}

impl MetricLog {
    /// Create a handle for the configured log path. The file itself is
    /// created lazily on first append.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.metrics_path(),
        }
    }

    /// Append one record as a single line, creating the data directory
    /// and log file if absent.
    pub async fn append(&self, record: &MetricRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!(kind = %record.kind, value = record.value, "appended metric");
        Ok(())
    }

    /// Read every record in append order. A missing log file is an empty
    /// log, not an error.
    pub async fn read_all(&self) -> Result<Vec<MetricRecord>> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line)
                .map_err(|source| StorageError::Corrupt { line: idx + 1, source })?;
            records.push(record);
        }
        Ok(records)
    }
}
