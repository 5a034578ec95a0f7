use runscan_types::StrippedRun;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Serialize `value` as compact JSON into `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string(value)?;
    fs::write(path, &content)?;
    Ok(content.len() as u64)
}

/// Copy a capture file into `raw_dir` under its own file name.
pub fn copy_raw(source: &Path, raw_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(raw_dir)?;

    let name = source.file_name().ok_or_else(|| {
        crate::Error::InvalidOperation(format!("no file name in {}", source.display()))
    })?;
    let target = raw_dir.join(name);
    fs::copy(source, &target)?;
    Ok(target)
}

/// Remove `dir` and everything in it; a missing directory is not an error.
pub fn clear_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

/// Read a previously published runs file.
pub fn read_runs(path: &Path) -> Result<Vec<StrippedRun>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
