pub mod config;
pub mod error;
pub mod ops;
pub mod storage;

pub use config::{Config, resolve_workspace_path};
pub use error::{Error, Result};
pub use ops::{
    Dataset, InspectResult, PipelineProgress, PipelineService, PipelineSummary, StatsReport,
    build_manifest, inspect_capture, load_stats, write_manifest,
};
