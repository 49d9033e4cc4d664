//! Record filtering.

use crate::MetricRecord;

/// Filter records by kind and/or trim to the most recent `limit`.
///
/// The kind match is exact and case-sensitive. `limit` keeps the last N
/// records after filtering, preserving order. A limit of zero means
/// unlimited (the CLI also maps negative limits to `None`); callers rely
/// on that falsy-limit behavior.
pub fn query(
    records: &[MetricRecord],
    kind: Option<&str>,
    limit: Option<usize>,
) -> Vec<MetricRecord> {
    let mut matched: Vec<MetricRecord> = records
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .cloned()
        .collect();

    if let Some(limit) = limit.filter(|l| *l > 0) {
        if matched.len() > limit {
            matched.drain(..matched.len() - limit);
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn record(kind: &str, value: f64) -> MetricRecord {
        MetricRecord::new(kind, value, Map::new())
    }

    fn values(records: &[MetricRecord]) -> Vec<f64> {
        records.iter().map(|r| r.value).collect()
    }

    #[test]
    fn filters_by_kind_preserving_order() {
        let records = vec![
            record("build_time", 1.0),
            record("test_coverage", 2.0),
            record("build_time", 3.0),
        ];

        let matched = query(&records, Some("build_time"), None);
        assert_eq!(values(&matched), vec![1.0, 3.0]);
        assert!(matched.iter().all(|r| r.kind == "build_time"));
    }

    #[test]
    fn kind_match_is_case_sensitive() {
        let records = vec![record("build_time", 1.0)];
        assert!(query(&records, Some("Build_Time"), None).is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let records = vec![record("build_time", 1.0)];
        assert!(query(&records, Some("blog_posts"), None).is_empty());
    }

    #[test]
    fn limit_keeps_the_last_n() {
        let records = vec![
            record("build_time", 1.0),
            record("build_time", 2.0),
            record("build_time", 3.0),
        ];

        let matched = query(&records, None, Some(2));
        assert_eq!(values(&matched), vec![2.0, 3.0]);
    }

    #[test]
    fn limit_larger_than_input_returns_all() {
        let records = vec![record("build_time", 1.0)];
        assert_eq!(query(&records, None, Some(10)).len(), 1);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let records = vec![record("build_time", 1.0), record("build_time", 2.0)];
        assert_eq!(query(&records, None, Some(0)).len(), 2);
    }

    #[test]
    fn filter_applies_before_limit() {
        let records = vec![
            record("build_time", 1.0),
            record("test_coverage", 2.0),
            record("build_time", 3.0),
            record("build_time", 4.0),
        ];

        let matched = query(&records, Some("build_time"), Some(2));
        assert_eq!(values(&matched), vec![3.0, 4.0]);
    }
}
