mod inspect;
mod manifest;
mod pipeline;
mod stats;

pub use inspect::{InspectResult, inspect_capture};
pub use manifest::{build_manifest, write_manifest};
pub use pipeline::{Dataset, PipelineProgress, PipelineService, PipelineSummary};
pub use stats::{StatsReport, load_stats};
