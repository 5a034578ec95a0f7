// Engine module - Core reconstruction logic (filtering, segmentation, extraction, summaries)
// This layer sits between raw captures (types/providers) and the runtime orchestrator

pub mod analysis;
pub mod checkpoints;
pub mod filter;
pub mod segment;
pub mod summary;

pub use checkpoints::{Marker, MarkerField, MARKERS, extract_checkpoints};
pub use filter::{DeskipRules, FilterReport, SkipReason, DESKIP_RULES, deskip, filter_day};
pub use segment::{Run, segment_runs};
pub use summary::{DEATH_MARKER, TIMESTAMP_BUCKET_SECONDS, summarize_run};

use runscan_types::{Day, RawDay, StrippedRun};

// Façade API - Stable public interface for runtime and CLI layers

/// Everything derived from one capture session.
#[derive(Debug, Clone)]
pub struct DayResult {
    pub day: Day,
    pub report: FilterReport,
    pub runs: Vec<StrippedRun>,
}

/// Filter, segment, extract and summarize one capture session.
pub fn process_day(raw: RawDay) -> DayResult {
    let (day, report) = filter_day(raw);
    let runs = summarize_day(&day);
    DayResult { day, report, runs }
}

/// Summaries for every run of an already filtered day, in order.
pub fn summarize_day(day: &Day) -> Vec<StrippedRun> {
    segment_runs(&day.observations)
        .into_iter()
        .map(|run| {
            let checkpoints = extract_checkpoints(&run);
            summarize_run(day, &run, &checkpoints)
        })
        .collect()
}
