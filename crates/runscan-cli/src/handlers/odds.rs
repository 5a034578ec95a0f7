use crate::presentation::stats::print_chance;
use anyhow::{Context, Result, anyhow};
use runscan_engine::analysis::SplitKind;
use runscan_runtime::load_stats;
use runscan_types::parse_mmss;
use std::path::Path;

pub fn handle(runs_path: &Path, kind: SplitKind, cutoff: &str, days: u32) -> Result<()> {
    let cutoff_secs = parse_mmss(cutoff).with_context(|| format!("Invalid --cutoff {:?}", cutoff))?;
    let report = load_stats(runs_path)?;

    let split = report
        .odds
        .split(kind)
        .ok_or_else(|| anyhow!("No odds for {}", kind.label()))?;
    let fit = split.fit.ok_or_else(|| {
        anyhow!(
            "Not enough {} splits to estimate times ({} recorded, need at least two distinct)",
            kind.label(),
            split.count
        )
    })?;

    let chance = report
        .odds
        .chance_by(kind, f64::from(cutoff_secs), f64::from(days))
        .unwrap_or(0.0);

    print_chance(split, &fit, cutoff_secs, days, chance, report.odds.average_runs_per_day);
    Ok(())
}
