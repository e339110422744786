// ==========================================
// Warranty Analytics - CLI Entry Point
// ==========================================
// Usage: warranty-analytics <snapshot.(csv|xlsx|xls)> [dimension]
//   dimension: development | constructive_system | failure_type
//              (default: constructive_system)
// Loads a service-request snapshot, computes the reliability report
// for the chosen dimension, and logs the dashboard summary.
// ==========================================

use std::process::ExitCode;

use warranty_analytics::{AbcThresholds, DashboardApi, Dimension};

fn main() -> ExitCode {
    warranty_analytics::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", warranty_analytics::APP_NAME, warranty_analytics::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let snapshot_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: warranty-analytics <snapshot.(csv|xlsx|xls)> [dimension]");
            return ExitCode::FAILURE;
        }
    };
    let dimension = match args.next() {
        Some(raw) => match Dimension::parse(&raw) {
            Some(d) => d,
            None => {
                eprintln!("unknown dimension '{raw}' (expected development | constructive_system | failure_type)");
                return ExitCode::FAILURE;
            }
        },
        None => Dimension::ConstructiveSystem,
    };

    if let Err(e) = run(&snapshot_path, dimension) {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(snapshot_path: &str, dimension: Dimension) -> anyhow::Result<()> {
    let api = DashboardApi::new();

    let (requests, stats) = api.load_requests(snapshot_path)?;
    tracing::info!(
        imported = stats.imported,
        skipped = stats.skipped_missing_opened_at,
        "snapshot loaded: {}",
        snapshot_path
    );

    let today = chrono::Local::now().date_naive();
    let summary = api.dashboard_summary(&requests, dimension, AbcThresholds::default(), today)?;

    tracing::info!(
        dimension = %summary.dimension,
        total = summary.total_requests,
        open = summary.open_requests,
        closed = summary.closed_requests,
        clamped_intervals = summary.report.clamped_intervals,
        "snapshot overview"
    );

    match summary.report.mttc_days {
        Some(mttc) => tracing::info!("MTTC: {:.1} days", mttc),
        None => tracing::info!("MTTC: no closed requests"),
    }

    let fmt_metric = |value: Option<f64>| match value {
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    };
    for (group, metrics) in &summary.report.groups {
        tracing::info!(
            "group {}: n={} mtbf_h={} mttr_h={} availability%={}",
            group,
            metrics.sample_size,
            fmt_metric(metrics.mtbf_hours),
            fmt_metric(metrics.mttr_hours),
            fmt_metric(metrics.availability_pct),
        );
    }

    for entry in &summary.abc {
        tracing::info!(
            "ABC {}: {} ({} incidents, cumulative {:.1}%)",
            entry.category,
            entry.group_key,
            entry.count,
            entry.cumulative_pct,
        );
    }

    let aging = summary.aging;
    tracing::info!(
        "open requests by age: 0-15d={} 16-30d={} 31-45d={} 46-60d={} >60d={}",
        aging.open.d0_15, aging.open.d16_30, aging.open.d31_45, aging.open.d46_60, aging.open.over_60
    );
    tracing::info!(
        "closed requests by closure time: 0-15d={} 16-30d={} 31-45d={} 46-60d={} >60d={}",
        aging.closed.d0_15, aging.closed.d16_30, aging.closed.d31_45, aging.closed.d46_60, aging.closed.over_60
    );

    Ok(())
}
