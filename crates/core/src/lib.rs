//! Evaldash core data model.
//!
//! This crate defines the metric record, the summary statistics over a
//! numeric series, and the record query helpers shared by the dashboard
//! and synthesis reporters.

#![warn(missing_docs)]

// The persisted entity
mod record;

// Aggregation
mod stats;

// Filtering
mod query;

// Re-exports
pub use record::{display_name, MetricRecord};
pub use stats::Stats;
pub use query::query;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
