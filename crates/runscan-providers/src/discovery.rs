use std::path::Path;
use walkdir::WalkDir;

use crate::Result;
use crate::traits::{CaptureFile, CaptureSource};

/// Capture files of one source directly inside `dir`, in dataset order.
///
/// Names that do not match the source's pattern are skipped silently.
pub fn scan_captures(source: &dyn CaptureSource, dir: &Path) -> Result<Vec<CaptureFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(key) = source.probe(path) {
            files.push(CaptureFile {
                path: path.to_path_buf(),
                key,
                source_id: source.id(),
            });
        }
    }

    files.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}
