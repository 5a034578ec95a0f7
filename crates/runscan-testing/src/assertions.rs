//! Custom assertions over published outputs.
//!
//! Provides high-level assertions that make tests more readable:
//! - Run count validation
//! - Per-run field checks
//! - Manifest consistency with the files on disk

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Assert that a runs array contains the expected number of runs.
pub fn assert_run_count(json: &Value, expected: usize) -> Result<()> {
    let runs = json.as_array().context("Expected a JSON array of runs")?;

    if runs.len() != expected {
        anyhow::bail!("Expected {} runs, got {}", expected, runs.len());
    }

    Ok(())
}

/// Assert the dates of all runs, in order.
pub fn assert_run_dates(json: &Value, expected: &[&str]) -> Result<()> {
    let runs = json.as_array().context("Expected a JSON array of runs")?;
    let dates = runs
        .iter()
        .enumerate()
        .map(|(i, run)| {
            run["date"]
                .as_str()
                .with_context(|| format!("Run {} missing date", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if dates != expected {
        anyhow::bail!("Expected dates {:?}, got {:?}", expected, dates);
    }

    Ok(())
}

/// Assert that run `index` carries `field` with the given split seconds.
pub fn assert_split(json: &Value, index: usize, field: &str, seconds: u64) -> Result<()> {
    let run = json
        .get(index)
        .with_context(|| format!("No run at index {}", index))?;
    let actual = run[field]
        .as_u64()
        .with_context(|| format!("Run {} has no {} split", index, field))?;

    if actual != seconds {
        anyhow::bail!(
            "Run {} {} split is {} but expected {}",
            index,
            field,
            actual,
            seconds
        );
    }

    Ok(())
}

/// Assert that every manifest entry names an existing file of the recorded size.
pub fn assert_manifest_matches(manifest: &Value, output_dir: &Path) -> Result<()> {
    let entries = manifest
        .as_array()
        .context("Expected manifest to be a JSON array")?;

    for (i, entry) in entries.iter().enumerate() {
        let path = entry["path"]
            .as_str()
            .with_context(|| format!("Entry {} missing path", i))?;
        let size = entry["size"]
            .as_u64()
            .with_context(|| format!("Entry {} missing size", i))?;

        let actual = std::fs::metadata(output_dir.join(path))
            .with_context(|| format!("Manifest lists missing file {}", path))?
            .len();
        if actual != size {
            anyhow::bail!("{} is {} bytes but manifest says {}", path, actual, size);
        }
    }

    Ok(())
}
