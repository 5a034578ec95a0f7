use runscan_engine::{DayResult, process_day};
use runscan_providers::detect_source_from_path;
use std::path::Path;

use crate::{Error, Result};

/// One capture file run through the pipeline without publishing anything.
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub source_id: &'static str,
    pub result: DayResult,
}

pub fn inspect_capture(path: &Path, year: i32) -> Result<InspectResult> {
    let source = detect_source_from_path(path, year)?;
    let raw = source.load(path).map_err(|err| Error::Capture {
        path: path.to_path_buf(),
        source: err,
    })?;

    Ok(InspectResult {
        source_id: source.id(),
        result: process_day(raw),
    })
}
