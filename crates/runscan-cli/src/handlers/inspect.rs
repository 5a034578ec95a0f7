use crate::presentation::runs::{print_csv, print_json, print_plain};
use crate::types::OutputFormat;
use anyhow::Result;
use runscan_runtime::inspect_capture;
use std::path::Path;

pub fn handle(file: &Path, year: i32, format: OutputFormat) -> Result<()> {
    let inspected = inspect_capture(file, year)?;

    match format {
        OutputFormat::Plain => print_plain(file, &inspected),
        OutputFormat::Json => print_json(file, &inspected)?,
        OutputFormat::Csv => print_csv(&inspected.result.runs)?,
    }

    Ok(())
}
