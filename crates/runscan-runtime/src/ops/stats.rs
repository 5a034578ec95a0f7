use runscan_engine::analysis::{DailySummary, OddsReport, SplitTable, collect_splits, daily_summary, odds};
use runscan_types::StrippedRun;
use std::path::Path;

use crate::storage::read_runs;
use crate::{Error, Result};

/// Everything the stats and odds views need from a published runs file.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub runs: Vec<StrippedRun>,
    pub table: SplitTable,
    pub odds: OddsReport,
}

impl StatsReport {
    pub fn from_runs(runs: Vec<StrippedRun>) -> Self {
        let table = collect_splits(&runs);
        let odds = odds(&table);
        Self { runs, table, odds }
    }

    /// Date of the last day in the file.
    pub fn latest_date(&self) -> Option<&str> {
        self.table.days.last().map(|d| d.date.as_str())
    }

    pub fn daily(&self, date: &str) -> Option<DailySummary> {
        daily_summary(&self.runs, &self.table, date)
    }
}

pub fn load_stats(path: &Path) -> Result<StatsReport> {
    if !path.exists() {
        return Err(Error::InvalidOperation(format!(
            "runs file not found: {} (run `runscan process` first)",
            path.display()
        )));
    }
    Ok(StatsReport::from_runs(read_runs(path)?))
}
