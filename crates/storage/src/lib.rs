//! Evaldash storage layer.
//!
//! One append-only JSONL log under a single configurable data directory.
//! No concurrent-writer coordination is provided: two processes appending
//! at once may interleave at the line level if the platform's append-mode
//! write is not atomic for the payload size. Acceptable for a single-user
//! local tool, but a known limitation.

#![warn(missing_docs)]

mod config;
mod log;

pub use config::{Config, DATA_DIR_ENV};
pub use log::MetricLog;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored line failed to parse
    #[error("corrupt log line {line}: {source}")]
    Corrupt {
        /// 1-based line number in the log file
        line: usize,
        /// The underlying JSON error
        source: serde_json::Error,
    },
}
