use runscan_types::ManifestEntry;
use std::path::Path;
use walkdir::WalkDir;

use crate::Result;
use crate::storage::write_json;

/// Every file under `output_dir` except `exclude`, sorted by relative path.
pub fn build_manifest(output_dir: &Path, exclude: &str) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(output_dir).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(output_dir) else {
            continue;
        };
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if path == exclude {
            continue;
        }

        entries.push(ManifestEntry {
            path,
            size: entry.metadata()?.len(),
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Build and write the manifest; returns the number of entries.
pub fn write_manifest(output_dir: &Path, manifest_file: &str) -> Result<usize> {
    let entries = build_manifest(output_dir, manifest_file)?;
    write_json(&output_dir.join(manifest_file), &entries)?;
    Ok(entries.len())
}
