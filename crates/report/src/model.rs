//! Typed report models, independent of any output format.

use evaldash_core::{Stats, Time};

/// Per-kind statistics block.
#[derive(Debug, Clone, PartialEq)]
pub struct KindSummary {
    /// Raw kind tag as stored ("build_time")
    pub kind: String,
    /// Display title ("Build Time")
    pub title: String,
    /// Statistics over the kind's values
    pub stats: Stats,
}

/// One row of the recent-events view.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    /// Display title of the record's kind
    pub title: String,
    /// When the record was logged
    pub timestamp: Time,
    /// Raw value
    pub value: f64,
}

/// The full dashboard: summary blocks plus the recent-events view.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// When the report was built
    pub generated_at: Time,
    /// One summary per kind, in first-seen order
    pub summaries: Vec<KindSummary>,
    /// Most recent records, newest first
    pub recent: Vec<RecentEntry>,
}
