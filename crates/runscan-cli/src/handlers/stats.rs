use crate::presentation::stats::{print_daily, print_odds};
use anyhow::{Result, anyhow};
use runscan_runtime::load_stats;
use std::path::Path;

pub fn handle(runs_path: &Path, day: Option<&str>) -> Result<()> {
    let report = load_stats(runs_path)?;

    let date = match day {
        Some(date) => date,
        None => report
            .latest_date()
            .ok_or_else(|| anyhow!("No runs in {}", runs_path.display()))?,
    };

    let daily = report
        .daily(date)
        .ok_or_else(|| anyhow!("No runs recorded on {:?}", date))?;

    print_daily(&daily);
    println!();
    print_odds(&report.odds);
    Ok(())
}
