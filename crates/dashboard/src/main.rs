use anyhow::Context;

use occupancy_dashboard::config::INPUT_VAR;
use occupancy_dashboard::{Dashboard, DashboardConfig};
use occupancy_roster::RosterDocument;

fn main() -> anyhow::Result<()> {
    occupancy_observability::init();

    let config = DashboardConfig::from_env();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(INPUT_VAR).ok())
        .with_context(|| format!("no roster document given (pass a path or set {INPUT_VAR})"))?;

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read roster document {path}"))?;
    let document = RosterDocument::from_json(&text)
        .with_context(|| format!("failed to decode roster document {path}"))?;

    let mut dashboard = Dashboard::new(&config);
    dashboard.load(document.into_snapshot());

    let report = dashboard.report();
    tracing::info!(
        total = report.total,
        companies = report.companies.rows.len(),
        selection = %report.companies.selection,
        "summary ready"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
