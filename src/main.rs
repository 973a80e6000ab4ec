use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use berth_planner::api::scenario_dto::ScenarioOverrides;
use berth_planner::domain::summary::ScheduleSummary;
use berth_planner::logger;
use berth_planner::presentation::export::write_csv_file;
use berth_planner::presentation::table::ScheduleTable;
use berth_planner::presentation::timeline::Timeline;
use berth_planner::load_scenario_with;

/// Plans the service of arriving ships on a pool of identical berths.
#[derive(Debug, Parser)]
#[command(name = "berth-planner", version, about)]
struct Cli {
    /// Scenario file (JSON) with berths and ship requests.
    #[arg(short, long)]
    scenario: PathBuf,

    /// Number of berths, overrides the scenario file.
    #[arg(short, long)]
    berths: Option<i64>,

    /// Berth selection: `linear-scan` or `priority-queue`.
    #[arg(long)]
    selection: Option<String>,

    /// Initial berth availability: `earliest-arrival`, `start-of-day` or `fixed`.
    #[arg(long)]
    sentinel: Option<String>,

    /// Write the schedule table as CSV to this path.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also print the timeline bars.
    #[arg(long)]
    timeline: bool,

    /// Additionally write log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_file.as_deref());

    let overrides = ScenarioOverrides {
        berths: cli.berths,
        selection: cli.selection.clone(),
        sentinel: cli.sentinel.clone(),
        default_today: Some(Local::now().date_naive()),
    };

    let scenario = load_scenario_with(&cli.scenario, &overrides).with_context(|| format!("Failed to load scenario '{}'", cli.scenario.display()))?;
    let assignments = scenario.schedule().context("Scheduling failed")?;
    log::info!("Scheduled {} ships on {} berths.", assignments.len(), scenario.berth_count);

    let table = ScheduleTable::from_assignments(&assignments);
    println!("{}", table);

    if cli.timeline {
        println!("{}", Timeline::from_assignments(&assignments));
    }

    // `schedule` succeeded, so the berth count is positive.
    let summary = ScheduleSummary::from_assignments(scenario.berth_count as usize, &assignments);
    println!(
        "Makespan: {} h, total waiting: {} h, max waiting: {} h, utilization: {:.1} %",
        summary.makespan().num_hours(),
        summary.total_waiting.num_hours(),
        summary.max_waiting.num_hours(),
        summary.utilization() * 100.0
    );
    for usage in &summary.berths {
        println!("  {}: {} ships, busy {} h, idle {} h", usage.berth, usage.ships_served, usage.busy.num_hours(), usage.idle.num_hours());
    }

    if let Some(path) = &cli.csv {
        write_csv_file(&table, path).with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    Ok(())
}
