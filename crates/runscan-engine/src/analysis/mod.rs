// Analysis module - Split statistics and completion odds over summarized runs
// Pure business logic over persisted StrippedRun data

pub mod odds;
pub mod splits;

pub use odds::{LogNormalFit, OddsReport, SplitOdds, erf, normal_cdf, odds};
pub use splits::{
    DailySummary, DaySplits, RunSplits, SplitAverage, SplitKind, SplitTable, collect_splits,
    daily_summary,
};
