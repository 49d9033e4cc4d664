//! Static HTML formatting for the dashboard model.

use chrono::Local;

use crate::model::{DashboardReport, KindSummary, RecentEntry};

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background: #0a0a0a;
            color: #e0e0e0;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        header { border-bottom: 1px solid #2a2a2a; padding-bottom: 2rem; margin-bottom: 3rem; }
        h1 { font-size: 2rem; margin-bottom: 0.5rem; }
        .tagline { color: #888; font-size: 1.1rem; }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 1.5rem;
            margin-bottom: 3rem;
        }
        .stat-card, .recent {
            background: #1a1a1a;
            border: 1px solid #2a2a2a;
            border-radius: 8px;
            padding: 1.5rem;
        }
        .stat-card h2, .recent h2 { font-size: 1.2rem; margin-bottom: 1rem; color: #00d4ff; }
        .stat-row {
            display: flex;
            justify-content: space-between;
            padding: 0.5rem 0;
            border-bottom: 1px solid #2a2a2a;
        }
        .stat-row:last-child { border-bottom: none; }
        .stat-label { color: #888; }
        .stat-value { font-weight: 600; color: #e0e0e0; }
        .metric-entry {
            padding: 0.75rem 0;
            border-bottom: 1px solid #2a2a2a;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .metric-entry:last-child { border-bottom: none; }
        .metric-type { font-weight: 600; color: #00d4ff; }
        .metric-value { font-size: 1.5rem; font-weight: 700; }
        .metric-time { font-size: 0.85rem; color: #888; }
        footer {
            margin-top: 3rem;
            padding-top: 2rem;
            border-top: 1px solid #2a2a2a;
            text-align: center;
            color: #888;
            font-size: 0.9rem;
        }
"#;

/// Render the dashboard model as a complete standalone HTML page.
pub fn render(report: &DashboardReport) -> String {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("    <meta charset=\"UTF-8\">\n");
    page.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    page.push_str("    <title>Evaldash</title>\n");
    page.push_str(&format!("    <style>{STYLE}    </style>\n"));
    page.push_str("</head>\n<body>\n    <div class=\"container\">\n");

    page.push_str("        <header>\n");
    page.push_str("            <h1>Evaluation Dashboard</h1>\n");
    page.push_str(
        "            <p class=\"tagline\">Performance tracking and metrics synthesis</p>\n",
    );
    page.push_str("        </header>\n\n");

    page.push_str("        <div class=\"stats-grid\">\n");
    for summary in &report.summaries {
        page.push_str(&stat_card(summary));
    }
    page.push_str("        </div>\n\n");

    page.push_str("        <div class=\"recent\">\n");
    page.push_str(&format!(
        "            <h2>Recent Metrics (Last {})</h2>\n",
        report.recent.len()
    ));
    for entry in &report.recent {
        page.push_str(&metric_entry(entry));
    }
    page.push_str("        </div>\n\n");

    page.push_str(&format!(
        "        <footer>\n            <p>Evaldash &bull; Generated {}</p>\n        </footer>\n",
        report
            .generated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    ));

    page.push_str("    </div>\n</body>\n</html>\n");
    page
}

fn stat_card(summary: &KindSummary) -> String {
    format!(
        r#"            <div class="stat-card">
                <h2>{title}</h2>
                <div class="stat-row">
                    <span class="stat-label">Mean</span>
                    <span class="stat-value">{mean:.2}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Median</span>
                    <span class="stat-value">{median:.2}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Min / Max</span>
                    <span class="stat-value">{min:.2} / {max:.2}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Count</span>
                    <span class="stat-value">{count}</span>
                </div>
            </div>
"#,
        title = escape(&summary.title),
        mean = summary.stats.mean,
        median = summary.stats.median,
        min = summary.stats.min,
        max = summary.stats.max,
        count = summary.stats.count,
    )
}

fn metric_entry(entry: &RecentEntry) -> String {
    format!(
        r#"            <div class="metric-entry">
                <div>
                    <div class="metric-type">{title}</div>
                    <div class="metric-time">{time}</div>
                </div>
                <div class="metric-value">{value}</div>
            </div>
"#,
        title = escape(&entry.title),
        time = entry
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        value = entry.value,
    )
}

// Kind tags are free-form strings, so the few significant characters are
// escaped before they land in markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
