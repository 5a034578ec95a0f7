use std::path::Path;

use crate::traits::CaptureSource;
use crate::{Error, HistoricalSource, LiveSource, Result};

/// Create a capture source by ID
pub fn create_source(id: &str, year: i32) -> Result<Box<dyn CaptureSource>> {
    match id {
        "historical" => Ok(Box::new(HistoricalSource::new(year))),
        "live" => Ok(Box::new(LiveSource)),
        _ => Err(Error::Parse(format!("Unknown capture source: {}", id))),
    }
}

/// Create all capture sources, historical first
pub fn create_all_sources(year: i32) -> Vec<Box<dyn CaptureSource>> {
    vec![Box::new(HistoricalSource::new(year)), Box::new(LiveSource)]
}

/// Detect which source a file belongs to from its name
pub fn detect_source_from_path(path: &Path, year: i32) -> Result<Box<dyn CaptureSource>> {
    create_all_sources(year)
        .into_iter()
        .find(|source| source.probe(path).is_some())
        .ok_or_else(|| {
            Error::Parse(format!(
                "Not a capture file (expected output_<mon><dd>.json or output_<digits>.json): {}",
                path.display()
            ))
        })
}
