//! Evaldash reporting.
//!
//! Aggregation builds typed report models; presentation is a separate
//! formatting step (HTML for the dashboard, plain text for synthesis), so
//! the stats logic never touches markup.

#![warn(missing_docs)]

mod model;
mod dashboard;
mod html;
mod synthesis;

pub use model::{DashboardReport, KindSummary, RecentEntry};
pub use dashboard::{build_dashboard, group_by_kind, DashboardRenderer, RECENT_LIMIT};
pub use synthesis::{synthesize, SynthesisReport};

/// Error type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
