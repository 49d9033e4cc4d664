//! Time-windowed synthesis report.

use std::fmt;

use chrono::{DateTime, Days, Local};
use evaldash_core::{display_name, MetricRecord, Stats};

use crate::dashboard::group_by_kind;
use crate::model::KindSummary;

/// Per-kind statistics over a trailing window of calendar days.
#[derive(Debug, Clone)]
pub struct SynthesisReport {
    /// Window length in days
    pub window_days: u64,
    /// Start of the window (exclusive cutoff)
    pub from: DateTime<Local>,
    /// End of the window
    pub to: DateTime<Local>,
    /// Total records inside the window
    pub total: usize,
    /// One summary per kind, in first-seen order
    pub summaries: Vec<KindSummary>,
}

/// Summarize the records from the last `window_days` calendar days, or
/// `None` when the window is empty.
///
/// The cutoff is local "now" minus whole calendar days, so day boundaries
/// follow the host's wall clock rather than UTC. Records timestamped
/// strictly after the cutoff are kept.
pub fn synthesize(records: &[MetricRecord], window_days: u64) -> Option<SynthesisReport> {
    let now = Local::now();
    let cutoff = now.checked_sub_days(Days::new(window_days));

    let recent: Vec<MetricRecord> = records
        .iter()
        .filter(|r| match cutoff {
            Some(cutoff) => r.timestamp.with_timezone(&Local) > cutoff,
            // Window reaches past representable time; everything is inside.
            None => true,
        })
        .cloned()
        .collect();

    if recent.is_empty() {
        return None;
    }

    let from = cutoff.unwrap_or_else(|| recent[0].timestamp.with_timezone(&Local));

    let summaries = group_by_kind(&recent)
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

    Some(SynthesisReport {
        window_days,
        from,
        to: now,
        total: recent.len(),
        summaries,
    })
}

impl fmt::Display for SynthesisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {}-Day Synthesis ===", self.window_days)?;
        writeln!(f)?;
        writeln!(
            f,
            "Period: {} - {}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )?;
        writeln!(f, "Total metrics: {}", self.total)?;

        for summary in &self.summaries {
            writeln!(f)?;
            writeln!(f, "{}:", summary.title)?;
            writeln!(f, "  Count: {}", summary.stats.count)?;
            writeln!(f, "  Mean: {:.2}", summary.stats.mean)?;
            writeln!(f, "  Median: {:.2}", summary.stats.median)?;
            writeln!(
                f,
                "  Range: {:.2} - {:.2}",
                summary.stats.min, summary.stats.max
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::Map;

    fn record(kind: &str, value: f64) -> MetricRecord {
        MetricRecord::new(kind, value, Map::new())
    }

    fn aged(kind: &str, value: f64, days_ago: i64) -> MetricRecord {
        let mut r = record(kind, value);
        r.timestamp = chrono::Utc::now() - Duration::days(days_ago);
        r
    }

    #[test]
    fn empty_log_has_no_synthesis() {
        assert!(synthesize(&[], 7).is_none());
    }

    #[test]
    fn window_with_no_matches_has_no_synthesis() {
        let records = vec![aged("build_time", 120.0, 30)];
        assert!(synthesize(&records, 7).is_none());
    }

    #[test]
    fn keeps_only_records_inside_the_window() {
        let records = vec![
            aged("build_time", 120.0, 30),
            record("build_time", 80.0),
            record("test_coverage", 95.0),
        ];

        let report = synthesize(&records, 7).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.summaries.len(), 2);

        let build = &report.summaries[0];
        assert_eq!(build.kind, "build_time");
        assert_eq!(build.stats.count, 1);
        assert_eq!(build.stats.mean, 80.0);
    }

    #[test]
    fn formats_per_kind_blocks() {
        let records = vec![record("build_time", 120.0), record("build_time", 80.0)];

        let text = synthesize(&records, 7).unwrap().to_string();
        assert!(text.contains("=== 7-Day Synthesis ==="));
        assert!(text.contains("Total metrics: 2"));
        assert!(text.contains("Build Time:"));
        assert!(text.contains("Mean: 100.00"));
        assert!(text.contains("Median: 120.00"));
        assert!(text.contains("Range: 80.00 - 120.00"));
    }
}
