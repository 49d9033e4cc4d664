//! Summary statistics over a numeric series.

use serde::{Deserialize, Serialize};

/// Summary statistics for one metric kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Arithmetic mean
    pub mean: f64,
    /// Upper median: the element at sorted index `n / 2`
    pub median: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Number of values
    pub count: usize,
}

impl Stats {
    /// Compute statistics over a series, or `None` when it is empty.
    ///
    /// The median is the element at sorted index `n / 2` for even lengths
    /// too, so `[80, 120]` has median 120, not 100. Reports over existing
    /// logs depend on this exact rule.
    pub fn compute(values: &[f64]) -> Option<Stats> {
        if values.is_empty() {
            return None;
        }

        let sum: f64 = values.iter().sum();
        let mean = sum / values.len() as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let median = sorted[sorted.len() / 2];

        Some(Stats {
            mean,
            median,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            count: values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_stats() {
        assert_eq!(Stats::compute(&[]), None);
    }

    #[test]
    fn single_value_is_its_own_summary() {
        let stats = Stats::compute(&[42.0]).unwrap();
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn even_length_median_takes_upper_element() {
        // sorted [1,2,3,4], index 4/2 = 2 -> 3, not 2.5
        let stats = Stats::compute(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn two_build_times() {
        // sorted [80, 120], index 2/2 = 1 -> 120
        let stats = Stats::compute(&[120.0, 80.0]).unwrap();
        assert_eq!(stats.mean, 100.0);
        assert_eq!(stats.median, 120.0);
        assert_eq!(stats.min, 80.0);
        assert_eq!(stats.max, 120.0);
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = Stats::compute(&[3.0, 1.0, 2.0]).unwrap();
        let b = Stats::compute(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.median, 2.0);
    }
}
