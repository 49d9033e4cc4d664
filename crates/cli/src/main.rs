//! Evaldash CLI - local metrics logger and dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::{Parser, Subcommand};
use evaldash_core::{query, MetricRecord};
use evaldash_proactivity::NoopEvaluator;
use evaldash_report::{synthesize, DashboardRenderer};
use evaldash_storage::{Config, MetricLog};
use serde_json::{Map, Value};
use tracing::Level;

const AFTER_HELP: &str = "\
Examples:
  evaldash log efficiency_score 85
  evaldash log clarity_score 92 '{\"file\":\"response.txt\"}'
  evaldash log build_time 120 '{\"build\":\"010\"}'
  evaldash view
  evaldash synthesize 7

Metric types (documented vocabulary, not enforced):
  efficiency_score   response monitor
  clarity_score      reasoning review
  cost_optimization  model router
  build_time         minutes
  test_coverage      %
  blog_posts         count
";

#[derive(Parser)]
#[command(name = "evaldash")]
#[command(about = "Tool performance tracking: metrics log, dashboard, synthesis")]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a metric event
    Log {
        /// Metric type, e.g. "build_time"
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Numeric value
        value: f64,
        /// Extra fields as a JSON object
        #[arg(value_name = "METADATA_JSON")]
        metadata: Option<String>,
    },
    /// Generate the HTML dashboard
    View,
    /// List metrics, optionally filtered by type and trimmed to the last N
    List {
        /// Metric type filter (exact match)
        #[arg(value_name = "TYPE")]
        kind: Option<String>,
        /// Keep only the last N records; zero or negative means all
        limit: Option<i64>,
    },
    /// Print a synthesis report over a trailing window
    Synthesize {
        /// Window length in days
        #[arg(default_value_t = 7)]
        days: u64,
    },
    /// Run the proactivity evaluator and log its score
    Evaluate {
        /// Workspace to analyze (defaults to the current directory)
        workspace: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    let log = MetricLog::new(&config);

    match cli.command {
        Commands::Log {
            kind,
            value,
            metadata,
        } => {
            let metadata = match metadata {
                Some(text) => serde_json::from_str::<Map<String, Value>>(&text)
                    .context("metadata must be a JSON object")?,
                None => Map::new(),
            };

            let record = MetricRecord::new(kind, value, metadata);
            log.append(&record).await?;
            println!("Logged: {} = {}", record.kind, record.value);
        }
        Commands::View => {
            let records = log.read_all().await?;
            let renderer = DashboardRenderer::new(&config);

            match renderer.render(&records).await? {
                Some(path) => println!("Dashboard generated: {}", path.display()),
                None => println!("No metrics logged yet. Use: evaldash log <type> <value>"),
            }
        }
        Commands::List { kind, limit } => {
            let records = log.read_all().await?;
            let limit = limit.and_then(|l| usize::try_from(l).ok()).filter(|l| *l > 0);
            let matched = query(&records, kind.as_deref(), limit);

            if matched.is_empty() {
                println!("No metrics found.");
            } else {
                for record in matched {
                    println!(
                        "{} | {} = {}",
                        record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                        record.kind,
                        record.value,
                    );
                }
            }
        }
        Commands::Synthesize { days } => {
            let records = log.read_all().await?;

            match synthesize(&records, days) {
                Some(report) => print!("{report}"),
                None => println!("No metrics in last {days} days."),
            }
        }
        Commands::Evaluate { workspace } => {
            let workspace = match workspace {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };

            // No external evaluator ships with the CLI yet; the no-op
            // implementation keeps this a warn-and-skip path.
            let evaluator = NoopEvaluator;
            match evaldash_proactivity::evaluate(&log, &evaluator, &workspace).await? {
                Some(report) => println!(
                    "Proactivity score: {:.2} ({} issues, {} actionable, {} critical)",
                    report.score,
                    report.total_issues,
                    report.actionable_issues,
                    report.critical_issues,
                ),
                None => println!("Proactivity evaluation skipped."),
            }
        }
    }

    Ok(())
}
