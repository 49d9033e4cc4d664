//! Dashboard aggregation and rendering.

use std::path::{Path, PathBuf};

use evaldash_core::{display_name, MetricRecord, Stats};
use evaldash_storage::Config;
use tokio::fs;
use tracing::info;

use crate::html;
use crate::model::{DashboardReport, KindSummary, RecentEntry};
use crate::Result;

/// How many records the recent-events view shows.
pub const RECENT_LIMIT: usize = 20;

/// Partition records by kind, keeping kinds in first-seen order and
/// records in insertion order within each group.
pub fn group_by_kind(records: &[MetricRecord]) -> Vec<(String, Vec<&MetricRecord>)> {
    let mut groups: Vec<(String, Vec<&MetricRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(kind, _)| *kind == record.kind) {
            Some((_, group)) => group.push(record),
            None => groups.push((record.kind.clone(), vec![record])),
        }
    }
    groups
}

/// Build the dashboard model, or `None` when there is nothing to show.
pub fn build_dashboard(records: &[MetricRecord]) -> Option<DashboardReport> {
    if records.is_empty() {
        return None;
    }

    let summaries = group_by_kind(records)
        .into_iter()
        .filter_map(|(kind, group)| {
            let values: Vec<f64> = group.iter().map(|r| r.value).collect();
            let stats = Stats::compute(&values)?;
            Some(KindSummary {
                title: display_name(&kind),
                kind,
                stats,
            })
        })
        .collect();

    let recent = records
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|r| RecentEntry {
            title: display_name(&r.kind),
            timestamp: r.timestamp,
            value: r.value,
        })
        .collect();

    Some(DashboardReport {
        generated_at: chrono::Utc::now(),
        summaries,
        recent,
    })
}

/// Renders the dashboard model to a static HTML file.
pub struct DashboardRenderer {
    output: PathBuf,
}

impl DashboardRenderer {
    /// Create a renderer writing to the configured dashboard path.
    pub fn new(config: &Config) -> Self {
        Self {
            output: config.dashboard_path(),
        }
    }

    /// Where the dashboard is written.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Render and write the dashboard, overwriting any previous report.
    ///
    /// An empty log writes nothing and returns `Ok(None)`; that is a
    /// notice for the caller, not an error.
    pub async fn render(&self, records: &[MetricRecord]) -> Result<Option<&Path>> {
        let Some(report) = build_dashboard(records) else {
            return Ok(None);
        };

        if let Some(parent) = self.output.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.output, html::render(&report)).await?;

        info!(path = %self.output.display(), "dashboard generated");
        Ok(Some(&self.output))
    }
}
