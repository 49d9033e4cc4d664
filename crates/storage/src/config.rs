//! Data directory configuration.
//!
//! One `Config` value is built at startup and passed into each component;
//! nothing below this layer consults the environment.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "EVALDASH_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";
const METRICS_FILE: &str = "metrics.jsonl";
const DASHBOARD_FILE: &str = "dashboard.html";

/// Where the log and rendered dashboard live.
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
}

impl Config {
    /// Create a config rooted at an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory from `EVALDASH_DATA_DIR`, falling back
    /// to `./data` under the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => Self::new(dir),
            None => Self::new(DEFAULT_DATA_DIR),
        }
    }

    /// The data directory itself.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the append-only metrics log.
    pub fn metrics_path(&self) -> PathBuf {
        self.data_dir.join(METRICS_FILE)
    }

    /// Path the rendered dashboard is written to.
    pub fn dashboard_path(&self) -> PathBuf {
        self.data_dir.join(DASHBOARD_FILE)
    }
}
