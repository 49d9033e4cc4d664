//! Optional proactivity evaluation.
//!
//! The evaluator is an external collaborator that may not be installed.
//! Instead of probing for it at call time, the capability is an explicit
//! trait: the CLI wires in a real implementation when one exists and
//! [`NoopEvaluator`] otherwise. A missing or failing evaluator is a soft
//! condition; it warns and skips, it never fails the caller.

#![warn(missing_docs)]

use std::path::Path;

use async_trait::async_trait;
use evaldash_core::MetricRecord;
use evaldash_storage::MetricLog;
use serde_json::{json, Map};
use tracing::warn;

/// Metric kind appended after a successful evaluation.
pub const PROACTIVITY_KIND: &str = "proactivity";

/// Result of one proactivity evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProactivityReport {
    /// Overall proactivity score
    pub score: f64,
    /// All issues found in the workspace
    pub total_issues: usize,
    /// Issues with a concrete suggested action
    pub actionable_issues: usize,
    /// Issues flagged critical
    pub critical_issues: usize,
}

/// Capability interface for the external evaluator.
#[async_trait]
pub trait ProactivityEvaluator: Send + Sync {
    /// Whether a real evaluator is wired in.
    fn is_available(&self) -> bool {
        true
    }

    /// Analyze the workspace and produce a report.
    async fn generate_report(&self, workspace: &Path) -> anyhow::Result<ProactivityReport>;
}

/// Stand-in used when no evaluator is installed.
pub struct NoopEvaluator;

#[async_trait]
impl ProactivityEvaluator for NoopEvaluator {
    fn is_available(&self) -> bool {
        false
    }

    async fn generate_report(&self, _workspace: &Path) -> anyhow::Result<ProactivityReport> {
        anyhow::bail!("no proactivity evaluator installed")
    }
}

/// Run the evaluator and log its score.
///
/// On success one record of kind `proactivity` is appended, carrying the
/// issue counts as metadata, and the report is returned. When the
/// evaluator is unavailable or fails, nothing is appended and `Ok(None)`
/// comes back; only a failed append is a hard error.
pub async fn evaluate(
    log: &MetricLog,
    evaluator: &dyn ProactivityEvaluator,
    workspace: &Path,
) -> evaldash_storage::Result<Option<ProactivityReport>> {
    if !evaluator.is_available() {
        warn!("proactivity evaluator not installed, skipping evaluation");
        return Ok(None);
    }

    let report = match evaluator.generate_report(workspace).await {
        Ok(report) => report,
        Err(error) => {
            warn!(%error, "proactivity evaluation failed, skipping");
            return Ok(None);
        }
    };

    let mut metadata = Map::new();
    metadata.insert("total_issues".to_string(), json!(report.total_issues));
    metadata.insert(
        "actionable_issues".to_string(),
        json!(report.actionable_issues),
    );
    metadata.insert("critical_issues".to_string(), json!(report.critical_issues));

    let record = MetricRecord::new(PROACTIVITY_KIND, report.score, metadata);
    log.append(&record).await?;

    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaldash_storage::Config;
    use tempfile::TempDir;

    struct StubEvaluator;

    #[async_trait]
    impl ProactivityEvaluator for StubEvaluator {
        async fn generate_report(&self, _workspace: &Path) -> anyhow::Result<ProactivityReport> {
            Ok(ProactivityReport {
                score: 0.8,
                total_issues: 5,
                actionable_issues: 3,
                critical_issues: 1,
            })
        }
    }

    struct FailingEvaluator;

    #[async_trait]
    impl ProactivityEvaluator for FailingEvaluator {
        async fn generate_report(&self, _workspace: &Path) -> anyhow::Result<ProactivityReport> {
            anyhow::bail!("workspace scan failed")
        }
    }

    #[tokio::test]
    async fn noop_evaluator_appends_nothing() {
        let dir = TempDir::new().unwrap();
        let log = MetricLog::new(&Config::new(dir.path()));

        let result = evaluate(&log, &NoopEvaluator, dir.path()).await.unwrap();
        assert_eq!(result, None);
        assert!(log.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_evaluator_is_soft() {
        let dir = TempDir::new().unwrap();
        let log = MetricLog::new(&Config::new(dir.path()));

        let result = evaluate(&log, &FailingEvaluator, dir.path()).await.unwrap();
        assert_eq!(result, None);
        assert!(log.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn successful_evaluation_logs_one_record() {
        let dir = TempDir::new().unwrap();
        let log = MetricLog::new(&Config::new(dir.path()));

        let report = evaluate(&log, &StubEvaluator, dir.path())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.score, 0.8);

        let records = log.read_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, PROACTIVITY_KIND);
        assert_eq!(records[0].value, 0.8);
        assert_eq!(records[0].metadata.get("total_issues"), Some(&json!(5)));
        assert_eq!(
            records[0].metadata.get("actionable_issues"),
            Some(&json!(3))
        );
        assert_eq!(records[0].metadata.get("critical_issues"), Some(&json!(1)));
    }
}
